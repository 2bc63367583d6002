// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the terminal.

use draughts_core::{Board, Cell, Color, Coord, PieceKind, BOARD_SIZE};

/// Render the board with row 7 at the top, so Light plays up the screen.
/// Men print lowercase, kings uppercase.
pub fn render_board(board: &Board) -> String {
    let mut output = String::new();
    for y in (0..BOARD_SIZE).rev() {
        output.push(char::from(b'0' + y));
        output.push(' ');
        for x in 0..BOARD_SIZE {
            let symbol = match board.cell(Coord::new(x, y)) {
                Cell::Empty => '.',
                Cell::Occupied(piece) => match (piece.color, piece.kind) {
                    (Color::Light, PieceKind::Man) => 'o',
                    (Color::Light, PieceKind::King) => 'O',
                    (Color::Dark, PieceKind::Man) => 'x',
                    (Color::Dark, PieceKind::King) => 'X',
                },
            };
            output.push(' ');
            output.push(symbol);
        }
        output.push('\n');
    }
    output.push_str("  ");
    for x in 0..BOARD_SIZE {
        output.push(' ');
        output.push(char::from(b'0' + x));
    }
    output.push('\n');
    output
}
