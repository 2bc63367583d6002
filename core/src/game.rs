// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn orchestration: move validation and execution, promotion, undo and
//! terminal-state detection.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::engine::{ChosenMove, MoveSource};
use crate::export;
use crate::history::{History, MoveRecord};
use crate::piece::{Piece, PieceKind};
use crate::{Color, Coord, GameError, BOARD_SIZE};

/// Rows initially occupied per side; 12 men each on the playable squares.
const SETUP_ROWS: u8 = 3;

/// One participant: a name, a color and the pieces it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
    /// Owned pieces in insertion order. Must always agree with the board's
    /// view; [`Game::verify_consistency`] checks exactly that.
    pub pieces: Vec<Piece>,
    pub winner: bool,
}

impl Player {
    fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            pieces: Vec::new(),
            winner: false,
        }
    }

    /// The piece standing on `coord`, if this player owns one there.
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.pieces.iter().find(|piece| piece.pos == coord).copied()
    }

    fn index_at(&self, coord: Coord) -> Option<usize> {
        self.pieces.iter().position(|piece| piece.pos == coord)
    }

    fn remove_at(&mut self, coord: Coord) -> Option<Piece> {
        self.index_at(coord).map(|idx| self.pieces.remove(idx))
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// The side to move had no legal move; its opponent wins
    NoMoves,
    /// One side ran out of pieces; its opponent wins
    NoPieces,
    /// The turn limit was reached; nobody wins
    TurnLimit,
}

/// Current phase of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Finished(FinishReason),
}

/// Tunable game parameters.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Turn count at which an undecided game is declared drawn
    pub max_turns: u32,
    /// How many moves the undo history retains
    pub history_capacity: usize,
    pub light_name: String,
    pub dark_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            history_capacity: 20,
            light_name: "Light".to_string(),
            dark_name: "Dark".to_string(),
        }
    }
}

/// A complete game: board, players, history and the turn state machine.
///
/// The game owns all mutable state and mutates it synchronously. Move
/// sources receive `&mut Game` purely so they can probe candidate lines
/// with [`Game::move_piece`] and [`Game::undo`] before answering; anything
/// concurrent must work on its own [`Clone`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    light: Player,
    dark: Player,
    active: Color,
    turn: u32,
    status: GameStatus,
    history: History,
    config: GameConfig,
}

impl Game {
    /// Standard opening position with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Standard opening position: 12 men per side on the playable squares,
    /// Light on rows 0..3, Dark on rows 5..8, Light to move.
    pub fn with_config(config: GameConfig) -> Self {
        let mut game = Self::bare(config);
        for y in 0..SETUP_ROWS {
            for x in 0..BOARD_SIZE {
                if (x + y) % 2 == 0 {
                    game.add_piece(Piece::man(Color::Light, x, y));
                    game.add_piece(Piece::man(
                        Color::Dark,
                        BOARD_SIZE - 1 - x,
                        BOARD_SIZE - 1 - y,
                    ));
                }
            }
        }
        game
    }

    /// Game starting from an arbitrary position, Light to move.
    ///
    /// Fails with [`GameError::OutOfRange`] for a piece off the board and
    /// [`GameError::InconsistentState`] when two pieces claim one square.
    pub fn custom(
        config: GameConfig,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<Self, GameError> {
        let mut game = Self::bare(config);
        for piece in pieces {
            if !piece.pos.is_inside() {
                return Err(GameError::OutOfRange(piece.pos));
            }
            game.add_piece(piece);
        }
        game.verify_consistency()?;
        Ok(game)
    }

    fn bare(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            light: Player::new(config.light_name.clone(), Color::Light),
            dark: Player::new(config.dark_name.clone(), Color::Dark),
            active: Color::Light,
            turn: 0,
            status: GameStatus::Playing,
            history: History::new(config.history_capacity),
            config,
        }
    }

    fn add_piece(&mut self, piece: Piece) {
        self.board.place(piece);
        self.player_mut(piece.color).pieces.push(piece);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Light => &self.light,
            Color::Dark => &self.dark,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::Light => &mut self.light,
            Color::Dark => &mut self.dark,
        }
    }

    /// Color whose turn it is.
    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Turns completed so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The player marked as winner, if the game produced one.
    pub fn winner(&self) -> Option<&Player> {
        if self.light.winner {
            Some(&self.light)
        } else if self.dark.winner {
            Some(&self.dark)
        } else {
            None
        }
    }

    /// Every legal (piece, destination) pair for `color`, flattened from
    /// the per-piece move lists in collection order.
    pub fn legal_moves(&self, color: Color) -> Result<Vec<ChosenMove>, GameError> {
        let mut moves = Vec::new();
        for piece in &self.player(color).pieces {
            let (destinations, _) = piece.valid_moves(&self.board)?;
            for dest in destinations {
                moves.push(ChosenMove {
                    piece: *piece,
                    dest,
                });
            }
        }
        Ok(moves)
    }

    /// Play out one turn using `source` for the active player.
    ///
    /// Returns the status after the turn. Stepping a finished game changes
    /// nothing and reports the final status again. A recoverable
    /// validation failure ([`GameError::IllegalMove`]) leaves the game
    /// unchanged, turn counter included, so the caller can ask the source
    /// again.
    pub fn step(&mut self, source: &mut dyn MoveSource) -> Result<GameStatus, GameError> {
        if let GameStatus::Finished(_) = self.status {
            return Ok(self.status);
        }

        self.turn += 1;

        let Some(chosen) = source.next_move(self) else {
            // No move to make loses the game on the spot.
            let loser = self.active;
            self.player_mut(loser.opposite()).winner = true;
            self.status = GameStatus::Finished(FinishReason::NoMoves);
            tracing::info!(turn = self.turn, loser = %loser, "no legal moves, game over");
            return Ok(self.status);
        };

        if let Err(err) = self.move_piece(chosen.piece, chosen.dest) {
            self.turn -= 1; // the turn never happened
            return Err(err);
        }
        source.clear_selection();

        self.active = self.active.opposite();

        if self.player(self.active).pieces.is_empty() {
            let winner = self.active.opposite();
            self.player_mut(winner).winner = true;
            self.status = GameStatus::Finished(FinishReason::NoPieces);
            tracing::info!(turn = self.turn, winner = %winner, "opponent has no pieces, game over");
            return Ok(self.status);
        }

        if self.turn >= self.config.max_turns {
            self.status = GameStatus::Finished(FinishReason::TurnLimit);
            tracing::info!(turn = self.turn, "turn limit reached, draw");
        }

        Ok(self.status)
    }

    /// Validate and execute one move for the piece's owner.
    ///
    /// Turn-order discipline lives in [`Game::step`]; this method derives
    /// the acting side from the piece itself, so speculative strategies
    /// can probe lines for either player and [`Game::undo`] them.
    pub fn move_piece(&mut self, piece: Piece, dest: Coord) -> Result<(), GameError> {
        let cell = self.board.get(piece.pos)?;
        if !matches!(cell, Cell::Occupied(found) if found == piece) {
            return Err(GameError::IllegalMove {
                from: piece.pos,
                dest,
            });
        }

        let (valid, mut tree) = piece.valid_moves(&self.board)?;
        if !valid.contains(&dest) {
            return Err(GameError::IllegalMove {
                from: piece.pos,
                dest,
            });
        }

        let origin = piece.pos;
        let owner_idx = self
            .player(piece.color)
            .index_at(origin)
            .ok_or(GameError::InconsistentState(origin))
            .map_err(|err| self.fatal(err))?;

        // Captures are recognized by distance, never by a flag: any move
        // that changes row by more than one square must jump something.
        let is_capture = (i16::from(dest.y) - i16::from(origin.y)).abs() > 1;

        let mut captured = Vec::new();
        if is_capture {
            let path = tree.path_to(dest).map_err(|err| self.fatal(err))?;
            for hop in path.windows(2) {
                let mid = Coord::midpoint(hop[0], hop[1]);
                let victim = match self.board.cell(mid) {
                    Cell::Occupied(found) if found.color != piece.color => found,
                    _ => return Err(self.fatal(GameError::InvalidCaptureTarget(mid))),
                };
                if self.player_mut(victim.color).remove_at(mid).is_none() {
                    return Err(self.fatal(GameError::InconsistentState(mid)));
                }
                self.board.clear(mid);
                captured.push(victim);
            }
        }

        // Relocate, crowning a man that reached its far row.
        self.board.clear(origin);
        let mut moved = piece;
        moved.pos = dest;
        let promotion = if moved.promotes_on(dest.y) {
            moved.kind = PieceKind::King;
            Some(moved)
        } else {
            None
        };
        self.board.place(moved);
        self.player_mut(piece.color).pieces[owner_idx] = moved;

        tracing::debug!(
            color = %piece.color,
            from = %origin,
            to = %dest,
            captures = captured.len(),
            promoted = promotion.is_some(),
            "move executed"
        );

        self.history.push(MoveRecord {
            piece,
            dest,
            captured,
            promotion,
            active: self.active,
        });
        Ok(())
    }

    /// Reverse the most recently executed move.
    ///
    /// Restores the moved piece (demoting a promotion), puts captured
    /// pieces back in both views and hands the turn back to the side that
    /// made the move. Cross-checks the whole position afterwards.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let record = self.history.pop().ok_or(GameError::HistoryEmpty)?;
        let MoveRecord {
            piece,
            dest,
            captured,
            promotion,
            active,
        } = record;

        // What the owner's collection must currently hold for this record.
        let landed = promotion.unwrap_or(Piece { pos: dest, ..piece });
        let idx = match self.player(piece.color).index_at(dest) {
            Some(idx) if self.player(piece.color).pieces[idx] == landed => idx,
            _ => return Err(self.fatal(GameError::InconsistentState(dest))),
        };

        self.player_mut(piece.color).pieces[idx] = piece;
        self.board.clear(dest);
        self.board.place(piece);

        for victim in captured {
            self.player_mut(victim.color).pieces.push(victim);
            self.board.place(victim);
        }

        self.active = active;
        tracing::debug!(color = %piece.color, from = %dest, to = %piece.pos, "move undone");
        self.verify_consistency()
    }

    /// Check that both players' collections and the board tell the same
    /// story: every owned piece stands on its own cell and every occupied
    /// cell belongs to an owned piece. Two pieces claiming one square is
    /// also an inconsistency.
    ///
    /// An inconsistency means the engine state is corrupt and the game
    /// must be abandoned.
    pub fn verify_consistency(&self) -> Result<(), GameError> {
        for player in [&self.light, &self.dark] {
            for (idx, piece) in player.pieces.iter().enumerate() {
                if player.pieces[..idx].iter().any(|other| other.pos == piece.pos) {
                    return Err(self.fatal(GameError::InconsistentState(piece.pos)));
                }
                match self.board.get(piece.pos)? {
                    Cell::Occupied(found) if found == *piece => {}
                    _ => return Err(self.fatal(GameError::InconsistentState(piece.pos))),
                }
            }
        }
        for piece in self.board.pieces() {
            if self.player(piece.color).piece_at(piece.pos) != Some(piece) {
                return Err(self.fatal(GameError::InconsistentState(piece.pos)));
            }
        }
        Ok(())
    }

    /// Log an unrecoverable error together with a full board dump, then
    /// hand the error back for propagation.
    fn fatal(&self, err: GameError) -> GameError {
        tracing::error!(
            error = %err,
            board = %export::board_csv(&self.board),
            "unrecoverable engine state"
        );
        err
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
