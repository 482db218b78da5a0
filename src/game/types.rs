//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X (moves first in every fresh game).
    X,
    /// O (the computer's seat in single-player modes).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Unoccupied cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// 3x3 board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Writes a square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks whether the cell at `pos` is unoccupied.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// All squares as a slice, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string, numbering empty
    /// cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => result.push_str(&(idx + 1).to_string()),
                    Square::Occupied(mark) => result.push_str(&mark.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Opponent configuration. Selecting a mode starts a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing the terminal.
    TwoPlayer,
    /// O is automated with the biased opening picker.
    VsComputer,
    /// O is automated, taking its own wins and blocking X's before
    /// falling back to the opening picker.
    VsComputerSmart,
}

impl GameMode {
    /// True when the O seat is played by the computer.
    pub fn is_computer(self) -> bool {
        !matches!(self, GameMode::TwoPlayer)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two player",
            GameMode::VsComputer => "Vs computer",
            GameMode::VsComputerSmart => "Vs computer (smart)",
        }
    }

    /// The next mode in the selection cycle.
    pub fn cycle(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsComputer,
            GameMode::VsComputer => GameMode::VsComputerSmart,
            GameMode::VsComputerSmart => GameMode::TwoPlayer,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::TwoPlayer
    }
}

/// Current status of the game.
///
/// Always derived from the board after a move, never stored apart from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game ongoing.
    InProgress,
    /// Three in a row for the mark.
    Won(Mark),
    /// Full board, no winner.
    Draw,
}

impl GameStatus {
    /// True once the game has concluded.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Status line for display: empty while the game runs.
    pub fn text(self) -> String {
        match self {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(mark) => format!("{mark} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Complete game state.
///
/// Owned exclusively by the game engine and mutated only through its
/// move-application path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    mode: GameMode,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Fresh game in the given mode: empty board, X to move.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            mode,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// The configured mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The derived status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Writes a move's mark onto the board and records it. Status and
    /// turn handling stay with the engine.
    pub(super) fn record(&mut self, mov: Move) {
        self.board.set(mov.position, Square::Occupied(mov.mark));
        self.history.push(mov);
    }

    /// Sets the derived status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Hands the turn to the other mark.
    pub(super) fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}
