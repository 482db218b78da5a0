//! Draw detection.

use super::super::types::{Board, Square};
use tracing::instrument;

/// Checks if every cell is occupied. A full board with no completed
/// line is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use super::super::super::types::Mark;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for idx in 0..9 {
            let pos = Position::from_index(idx).expect("index in range");
            board.set(pos, Square::Occupied(Mark::X));
        }
        assert!(is_full(&board));
    }
}
