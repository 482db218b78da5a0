//! Status evaluation: win and draw detection.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from a board.
///
/// A completed line beats a full board; with neither, the game is still
/// in progress.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
