// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move-source interface between the rules engine and strategies.
//!
//! Strategy implementations live outside this crate and plug into
//! [`Game::step`] through [`MoveSource`]. A source may probe candidate
//! lines by calling [`Game::move_piece`] and [`Game::undo`] on the game it
//! is handed before committing to an answer; both are strictly sequential
//! and deterministic.

use crate::game::Game;
use crate::piece::Piece;
use crate::Coord;

/// A move chosen by a strategy: which piece to move and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub piece: Piece,
    pub dest: Coord,
}

/// Supplier of moves for one or both players.
pub trait MoveSource {
    /// Produce the next move for the game's active player.
    ///
    /// Returning `None` means no legal move exists. That loses the game
    /// for the active player and is a normal terminal signal, not an
    /// error.
    fn next_move(&mut self, game: &mut Game) -> Option<ChosenMove>;

    /// Drop any per-turn selection state. Called by [`Game::step`] once a
    /// move has been committed; stateless sources can ignore it.
    fn clear_selection(&mut self) {}
}
