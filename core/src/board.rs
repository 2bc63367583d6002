// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation.
//!
//! The board is pure storage: it records which piece (or empty marker)
//! occupies each cell and validates nothing beyond coordinate bounds.
//! Movement rules live in [`crate::piece`], [`crate::capture`] and
//! [`crate::game`].

use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::{Color, Coord, GameError, BOARD_SIZE};

/// Contents of a single board cell.
///
/// Every cell always holds a value; unoccupied cells hold [`Cell::Empty`]
/// rather than nothing, so lookups never produce a null-like case callers
/// have to special-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying piece, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(*piece),
        }
    }

    /// True when the cell holds a piece of the given color's opponent.
    pub fn holds_opponent_of(&self, color: Color) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.color != color)
    }
}

/// The 8x8 playing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Empty; (BOARD_SIZE as usize) * (BOARD_SIZE as usize)],
        }
    }

    /// Cell contents at `coord`, or [`GameError::OutOfRange`] when the
    /// coordinate is off the board.
    pub fn get(&self, coord: Coord) -> Result<Cell, GameError> {
        if !coord.is_inside() {
            return Err(GameError::OutOfRange(coord));
        }
        Ok(self.cells[Self::index_of(coord)])
    }

    /// Cell contents at a coordinate known to be on the board.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board. Use [`Board::get`] for the
    /// checked variant.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[Self::index_of(coord)]
    }

    /// Store `piece` at its own coordinate, overwriting the previous
    /// contents. Panics on an out-of-range coordinate.
    pub fn place(&mut self, piece: Piece) {
        let idx = Self::index_of(piece.pos);
        self.cells[idx] = Cell::Occupied(piece);
    }

    /// Mark the cell at `coord` empty. The storage counterpart of
    /// [`Board::place`]; panics on an out-of-range coordinate.
    pub fn clear(&mut self, coord: Coord) {
        let idx = Self::index_of(coord);
        self.cells[idx] = Cell::Empty;
    }

    /// Iterate over all pieces currently on the board, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().filter_map(Cell::piece)
    }

    fn index_of(coord: Coord) -> usize {
        assert!(coord.is_inside(), "coordinate {coord} is outside the board");
        (coord.y as usize) * (BOARD_SIZE as usize) + (coord.x as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
