//! Move records and the bounded undo history.

use crate::piece::Piece;
use crate::{Color, Coord};

/// Everything needed to reverse one executed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// The moved piece as it stood before the move (kind and origin)
    pub piece: Piece,
    /// Square the piece landed on
    pub dest: Coord,
    /// Opponent pieces removed by the move, in capture order
    pub captured: Vec<Piece>,
    /// The king created by promotion, when the move crowned a man
    pub promotion: Option<Piece>,
    /// Whose turn it was when the move executed
    pub active: Color,
}

/// Bounded ring of the most recent move records.
///
/// Pushing past capacity silently overwrites the oldest record, so undo
/// can only reach back `capacity` moves. Popping an empty ring returns
/// `None`; turning that into [`crate::GameError::HistoryEmpty`] is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct History {
    slots: Vec<Option<MoveRecord>>,
    head: usize,
    len: usize,
}

impl History {
    /// Ring holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Number of records currently retained.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append a record, overwriting the oldest once full.
    pub fn push(&mut self, record: MoveRecord) {
        if self.slots.is_empty() {
            return; // zero-capacity ring retains nothing
        }
        self.slots[self.head] = Some(record);
        self.head = (self.head + 1) % self.slots.len();
        self.len = (self.len + 1).min(self.slots.len());
    }

    /// Remove and return the most recently pushed record.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        if self.len == 0 {
            return None;
        }
        let cap = self.slots.len();
        self.head = (self.head + cap - 1) % cap;
        self.len -= 1;
        self.slots[self.head].take()
    }

    /// The most recently pushed record, if any, without removing it.
    pub fn last(&self) -> Option<&MoveRecord> {
        if self.len == 0 {
            return None;
        }
        let cap = self.slots.len();
        self.slots[(self.head + cap - 1) % cap].as_ref()
    }
}
