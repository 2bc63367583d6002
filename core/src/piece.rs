// SPDX-License-Identifier: MIT OR Apache-2.0

//! Piece variants and per-piece move generation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Board;
use crate::capture::CaptureTree;
use crate::{Color, Coord, GameError};

/// Piece variant.
///
/// The two kinds differ only in their direction tables and promotion
/// eligibility; movement and capture mechanics are otherwise shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Moves and captures along its two forward diagonals only
    Man,
    /// Promoted piece; moves and captures along all four diagonals
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Man => write!(f, "man"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub pos: Coord,
}

const LIGHT_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, 1), (-1, 1)];
const DARK_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (-1, -1)];
const KING_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

impl Piece {
    pub fn new(kind: PieceKind, color: Color, pos: Coord) -> Self {
        Self { kind, color, pos }
    }

    /// Man at the given square.
    pub fn man(color: Color, x: u8, y: u8) -> Self {
        Self::new(PieceKind::Man, color, Coord::new(x, y))
    }

    /// King at the given square.
    pub fn king(color: Color, x: u8, y: u8) -> Self {
        Self::new(PieceKind::King, color, Coord::new(x, y))
    }

    /// Diagonal directions this piece may move and capture along, in the
    /// fixed order the capture search explores them.
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match (self.kind, self.color) {
            (PieceKind::Man, Color::Light) => &LIGHT_MAN_DIRECTIONS,
            (PieceKind::Man, Color::Dark) => &DARK_MAN_DIRECTIONS,
            (PieceKind::King, _) => &KING_DIRECTIONS,
        }
    }

    /// Whether this piece, standing on `row`, must be crowned.
    pub fn promotes_on(&self, row: u8) -> bool {
        self.kind == PieceKind::Man && row == self.color.promotion_row()
    }

    /// All legal destinations for this piece on `board`, together with the
    /// capture tree the search produced.
    ///
    /// The destination list is the union of the plain diagonal steps and of
    /// every square reachable through some chained-capture sequence, not
    /// only the longest one. Order is deterministic: steps in direction
    /// order, then capture destinations in discovery order, deduplicated.
    pub fn valid_moves(&self, board: &Board) -> Result<(Vec<Coord>, CaptureTree), GameError> {
        let mut destinations = Vec::new();
        for &(dx, dy) in self.directions() {
            if let Some(step) = self.pos.offset(dx, dy) {
                if board.cell(step).is_empty() {
                    destinations.push(step);
                }
            }
        }

        let tree = CaptureTree::build(board, *self)?;
        for dest in tree.destinations() {
            if !destinations.contains(&dest) {
                destinations.push(dest);
            }
        }

        tracing::trace!(
            color = %self.color,
            kind = %self.kind,
            pos = %self.pos,
            moves = destinations.len(),
            captures = tree.has_captures(),
            "generated moves"
        );
        Ok((destinations, tree))
    }
}
