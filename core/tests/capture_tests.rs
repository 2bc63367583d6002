// SPDX-License-Identifier: MIT OR Apache-2.0

use draughts_core::{Board, CaptureTree, Color, Coord, GameError, Piece};

#[test]
fn single_jump_tree() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 3, 3));

    let mut tree = CaptureTree::build(&board, piece).unwrap();
    assert_eq!(tree.destinations(), vec![Coord::new(4, 4)]);
    assert_eq!(
        tree.path_to(Coord::new(4, 4)).unwrap(),
        vec![Coord::new(2, 2), Coord::new(4, 4)]
    );
}

#[test]
fn friendly_pieces_are_never_jumped() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Light, 3, 3));

    let tree = CaptureTree::build(&board, piece).unwrap();
    assert!(!tree.has_captures());
}

#[test]
fn chained_double_jump_reaches_a_square_two_levels_deep() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 3, 3));
    board.place(Piece::man(Color::Dark, 5, 5));

    let mut tree = CaptureTree::build(&board, piece).unwrap();
    assert_eq!(tree.destinations(), vec![Coord::new(4, 4), Coord::new(6, 6)]);
    assert_eq!(
        tree.path_to(Coord::new(6, 6)).unwrap(),
        vec![Coord::new(2, 2), Coord::new(4, 4), Coord::new(6, 6)]
    );
}

#[test]
fn intermediate_landing_squares_are_destinations_too() {
    // Chains do not have to be taken to the end; stopping after the first
    // jump is as legal as completing the double.
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 3, 3));
    board.place(Piece::man(Color::Dark, 5, 5));

    let mut tree = CaptureTree::build(&board, piece).unwrap();
    assert_eq!(
        tree.path_to(Coord::new(4, 4)).unwrap(),
        vec![Coord::new(2, 2), Coord::new(4, 4)]
    );
}

#[test]
fn king_tree_covers_both_directions_with_single_hop_paths() {
    let mut board = Board::new();
    let piece = Piece::king(Color::Light, 3, 3);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 4, 4));
    board.place(Piece::man(Color::Dark, 2, 2));

    let mut tree = CaptureTree::build(&board, piece).unwrap();
    let dests = tree.destinations();
    assert_eq!(dests.len(), 2);
    assert!(dests.contains(&Coord::new(5, 5)));
    assert!(dests.contains(&Coord::new(1, 1)));

    assert_eq!(
        tree.path_to(Coord::new(5, 5)).unwrap(),
        vec![Coord::new(3, 3), Coord::new(5, 5)]
    );
    assert_eq!(
        tree.path_to(Coord::new(1, 1)).unwrap(),
        vec![Coord::new(3, 3), Coord::new(1, 1)]
    );
}

#[test]
fn king_does_not_revisit_squares_already_in_the_tree() {
    // Two routes reach (4, 0): directly over (3, 1), or the long chain
    // over (3, 3), (5, 3) and (5, 1). The (+1, +1) direction is explored
    // first, so the chain claims the square and the direct jump is never
    // attached. The root square itself is protected the same way.
    let mut board = Board::new();
    let piece = Piece::king(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 3, 3));
    board.place(Piece::man(Color::Dark, 5, 3));
    board.place(Piece::man(Color::Dark, 5, 1));
    board.place(Piece::man(Color::Dark, 3, 1));

    let mut tree = CaptureTree::build(&board, piece).unwrap();
    assert_eq!(
        tree.destinations(),
        vec![Coord::new(4, 4), Coord::new(6, 2), Coord::new(4, 0)]
    );

    // the path to (4, 0) is the three-jump chain, not a direct hop
    assert_eq!(
        tree.path_to(Coord::new(4, 0)).unwrap(),
        vec![
            Coord::new(2, 2),
            Coord::new(4, 4),
            Coord::new(6, 2),
            Coord::new(4, 0),
        ]
    );
}

#[test]
fn man_trees_may_repeat_squares_and_paths_take_the_first() {
    // Both forward branches converge on (4, 4). Man searches carry no
    // duplicate guard, so the square appears once per route and the path
    // query resolves to the earliest-explored one.
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 4, 0);
    board.place(piece);
    for (x, y) in [(5, 1), (3, 1), (5, 3), (3, 3)] {
        board.place(Piece::man(Color::Dark, x, y));
    }

    let mut tree = CaptureTree::build(&board, piece).unwrap();
    assert_eq!(tree.node_count(), 5);
    assert_eq!(
        tree.destinations(),
        vec![
            Coord::new(6, 2),
            Coord::new(4, 4),
            Coord::new(2, 2),
            Coord::new(4, 4),
        ]
    );
    assert_eq!(
        tree.path_to(Coord::new(4, 4)).unwrap(),
        vec![Coord::new(4, 0), Coord::new(6, 2), Coord::new(4, 4)]
    );

    // the flattened move list still offers each square once
    let (dests, _) = piece.valid_moves(&board).unwrap();
    assert_eq!(
        dests,
        vec![Coord::new(6, 2), Coord::new(4, 4), Coord::new(2, 2)]
    );
}

#[test]
fn path_to_unknown_target_is_an_error() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);

    let mut tree = CaptureTree::build(&board, piece).unwrap();
    assert!(matches!(
        tree.path_to(Coord::new(4, 4)),
        Err(GameError::PathNotFound(_))
    ));
}

#[test]
fn path_queries_can_be_repeated() {
    let mut board = Board::new();
    let piece = Piece::man(Color::Light, 2, 2);
    board.place(piece);
    board.place(Piece::man(Color::Dark, 3, 3));

    let mut tree = CaptureTree::build(&board, piece).unwrap();
    let first = tree.path_to(Coord::new(4, 4)).unwrap();
    let second = tree.path_to(Coord::new(4, 4)).unwrap();
    assert_eq!(first, second);
}
