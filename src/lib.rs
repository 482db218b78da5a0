//! Noughts - terminal tic-tac-toe.
//!
//! The core is a small state machine: a [`GameEngine`] owns the board,
//! the turn order, and the derived status, and is the single gateway
//! for move application. Two computer strategies sit behind it: a
//! biased opening picker and a smart mode that takes wins and blocks
//! losses before falling back to the picker. The [`tui`] module is the
//! presentation collaborator: it feeds cell activations into the
//! engine, reads state back to render, and defers the computer's reply
//! by half a second so the human's mark lands on screen first.
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, GameMode, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new(GameMode::TwoPlayer);
//! for index in [0, 1, 4, 2, 8] {
//!     engine.apply_move(index)?;
//! }
//! assert_eq!(engine.state().status(), GameStatus::Won(Mark::X));
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod tui;

pub use game::{
    Board, GameEngine, GameMode, GameState, GameStatus, Mark, Move, MoveError, Position,
    RandomSource, Square, StdRandom, WINNING_LINES, check_winner, choose_move, evaluate,
    heuristic_move, is_full, winning_move,
};
