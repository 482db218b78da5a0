//! Move events and the move error taxonomy.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A single move: a mark placed at a position.
///
/// Moves are first-class domain events; they can be logged, replayed,
/// and compared against the board they produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it lands.
    pub position: Position,
}

impl Move {
    /// Creates a move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was rejected.
///
/// Every variant is an expected, recoverable condition: callers drop the
/// move and the game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has concluded; only a reset accepts new moves.
    #[display("Game is already over")]
    GameOver,

    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range", _0)]
    InvalidIndex(usize),
}

impl std::error::Error for MoveError {}
