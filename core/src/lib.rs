// SPDX-License-Identifier: MIT OR Apache-2.0

//! Draughts core - rules engine for an 8x8 diagonal-capture board game
//!
//! This crate provides the complete game logic:
//! - Board representation and manipulation
//! - Per-piece move generation, including the chained-capture search
//! - Move execution with promotion and bounded single-step undo
//! - A turn state machine driven by pluggable move sources
//!
//! Everything is synchronous and deterministic. Strategies that want to
//! evaluate positions speculatively do so through [`Game::move_piece`] and
//! [`Game::undo`] on a game they own (or a [`Game::clone`] of one).

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod capture;
pub mod engine;
pub mod export;
pub mod game;
pub mod history;
pub mod piece;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use board::{Board, Cell};
pub use capture::CaptureTree;
pub use engine::{ChosenMove, MoveSource};
pub use game::{FinishReason, Game, GameConfig, GameStatus, Player};
pub use history::{History, MoveRecord};
pub use piece::{Piece, PieceKind};

/// Number of cells along each board axis.
pub const BOARD_SIZE: u8 = 8;

/// Player color.
///
/// Light advances toward increasing rows, Dark toward decreasing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Moves first, promotes on row 7
    Light,
    /// Moves second, promotes on row 0
    Dark,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// The farthest row for this color; a man reaching it is crowned.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Color::Light => BOARD_SIZE - 1,
            Color::Dark => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// Board coordinate. `x` is the column, `y` the row, both in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check whether the coordinate lies on the board.
    pub fn is_inside(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// This coordinate displaced by a diagonal delta, or `None` when the
    /// result would leave the board.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Coord> {
        let x = i16::from(self.x) + i16::from(dx);
        let y = i16::from(self.y) + i16::from(dy);
        if (0..i16::from(BOARD_SIZE)).contains(&x) && (0..i16::from(BOARD_SIZE)).contains(&y) {
            Some(Coord::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Midpoint of two coordinates a jump apart.
    pub fn midpoint(a: Coord, b: Coord) -> Coord {
        Coord::new((a.x + b.x) / 2, (a.y + b.y) / 2)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors that can occur while operating the rules engine.
///
/// Only [`GameError::IllegalMove`] and [`GameError::HistoryEmpty`] are
/// recoverable; the rest indicate either a caller bug or corrupted engine
/// state, and the game they came from should be abandoned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("coordinate {0} is outside the board")]
    OutOfRange(Coord),

    /// The requested destination is not among the piece's legal moves
    #[error("moving {from} to {dest} is not legal")]
    IllegalMove { from: Coord, dest: Coord },

    /// A capture path midpoint did not hold an opponent piece
    #[error("expected an opponent piece to capture at {0}")]
    InvalidCaptureTarget(Coord),

    /// The capture search exceeded its traversal bound
    #[error("capture search exceeded its bound after {0} steps")]
    SearchOverrun(usize),

    /// The requested coordinate is not a node of the capture tree
    #[error("no capture path reaches {0}")]
    PathNotFound(Coord),

    /// Undo was requested but no move record is retained
    #[error("no recorded move to undo")]
    HistoryEmpty,

    /// The board and a player's piece collection disagree
    #[error("board and piece collections disagree at {0}")]
    InconsistentState(Coord),
}
