// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashSet;

use draughts_core::{Board, Color, Coord, Piece};

fn coords(dests: &[Coord]) -> HashSet<Coord> {
    dests.iter().copied().collect()
}

#[test]
fn corner_man_has_one_forward_step() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 0, 0);
    board.place(piece);

    let (dests, tree) = piece.valid_moves(&board).unwrap();
    assert_eq!(dests, vec![Coord::new(1, 1)]);
    assert!(!tree.has_captures());
    assert!(tree.destinations().is_empty());
}

#[test]
fn man_steps_both_forward_diagonals() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);

    let (dests, _) = piece.valid_moves(&board).unwrap();
    assert_eq!(coords(&dests), coords(&[Coord::new(3, 3), Coord::new(1, 3)]));
}

#[test]
fn dark_man_steps_toward_row_zero() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Dark, 3, 5);
    board.place(piece);

    let (dests, _) = piece.valid_moves(&board).unwrap();
    assert_eq!(coords(&dests), coords(&[Coord::new(4, 4), Coord::new(2, 4)]));
}

#[test]
fn king_steps_all_four_diagonals() {
    let mut board = Board::new();
    let piece = Piece::king(Color::Light, 3, 3);
    board.place(piece);

    let (dests, _) = piece.valid_moves(&board).unwrap();
    assert_eq!(
        coords(&dests),
        coords(&[
            Coord::new(4, 4),
            Coord::new(4, 2),
            Coord::new(2, 2),
            Coord::new(2, 4),
        ])
    );
}

#[test]
fn occupied_squares_are_not_step_destinations() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Light, 3, 3)); // friendly piece blocks

    let (dests, tree) = piece.valid_moves(&board).unwrap();
    assert_eq!(dests, vec![Coord::new(1, 3)]);
    assert!(!tree.has_captures());
}

#[test]
fn step_and_capture_destinations_union() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 3, 3));

    let (dests, tree) = piece.valid_moves(&board).unwrap();
    // one plain step remains, plus the jump landing square
    assert_eq!(coords(&dests), coords(&[Coord::new(1, 3), Coord::new(4, 4)]));
    assert_eq!(tree.destinations(), vec![Coord::new(4, 4)]);
}

#[test]
fn man_never_moves_or_captures_backward() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 3, 3);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 4, 2)); // behind the man

    let (dests, tree) = piece.valid_moves(&board).unwrap();
    assert_eq!(coords(&dests), coords(&[Coord::new(4, 4), Coord::new(2, 4)]));
    assert!(!tree.has_captures());
}

#[test]
fn blocked_jump_is_not_generated() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 3, 3));
    board.place(Piece::man(Color::Dark, 4, 4)); // landing square occupied

    let (dests, tree) = piece.valid_moves(&board).unwrap();
    assert_eq!(dests, vec![Coord::new(1, 3)]);
    assert!(!tree.has_captures());
}

#[test]
fn jump_with_no_landing_square_is_not_generated() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 6, 4);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 7, 5)); // landing would be off-board

    let (dests, tree) = piece.valid_moves(&board).unwrap();
    assert_eq!(dests, vec![Coord::new(5, 5)]);
    assert!(!tree.has_captures());
}

#[test]
fn hemmed_in_piece_has_no_moves() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 0, 6);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 1, 7)); // step blocked, jump off-board

    let (dests, tree) = piece.valid_moves(&board).unwrap();
    assert!(dests.is_empty());
    assert!(!tree.has_captures());
}
