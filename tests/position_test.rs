//! Typed position addressing.

use noughts::{Board, Mark, Position, Square};

#[test]
fn test_index_round_trip() {
    for index in 0..9 {
        let pos = Position::from_index(index).expect("index in range");
        assert_eq!(pos.index(), index);
    }
}

#[test]
fn test_out_of_range_index_has_no_position() {
    assert_eq!(Position::from_index(9), None);
    assert_eq!(Position::from_index(100), None);
}

#[test]
fn test_valid_moves_filters_occupied_cells_in_order() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::X));
    board.set(Position::Center, Square::Occupied(Mark::O));

    let moves = Position::valid_moves(&board);
    assert_eq!(moves.len(), 7);
    assert!(!moves.contains(&Position::TopLeft));
    assert!(!moves.contains(&Position::Center));
    // Ascending index order.
    for pair in moves.windows(2) {
        assert!(pair[0].index() < pair[1].index());
    }
}

#[test]
fn test_labels_render_through_display() {
    assert_eq!(Position::Center.to_string(), "center");
    assert_eq!(Position::BottomRight.to_string(), "bottom-right");
}
