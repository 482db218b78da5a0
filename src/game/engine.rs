//! The game engine: sole owner and mutator of game state.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::strategy::{self, RandomSource, StdRandom};
use super::types::{GameMode, GameState, Mark, Square};
use tracing::{debug, info, instrument};

/// Owns a [`GameState`] and drives it through the move state machine.
///
/// Every mutation, human- or computer-initiated, passes through
/// [`GameEngine::apply_move`] or [`GameEngine::place`], so the
/// occupied-cell and game-over invariants hold for any caller. Engines
/// are plain values with no shared or static state; independent games
/// are independent instances.
pub struct GameEngine {
    state: GameState,
    random: Box<dyn RandomSource + Send>,
}

impl GameEngine {
    /// Engine with an OS-seeded random source.
    pub fn new(mode: GameMode) -> Self {
        Self::with_random(mode, Box::new(StdRandom::from_entropy()))
    }

    /// Engine with an injected random source (fixed seeds, test doubles).
    pub fn with_random(mode: GameMode, random: Box<dyn RandomSource + Send>) -> Self {
        info!(?mode, "creating game engine");
        Self {
            state: GameState::new(mode),
            random,
        }
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    /// Starts a fresh game in the given mode: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) -> &GameState {
        info!(?mode, "resetting game");
        self.state = GameState::new(mode);
        &self.state
    }

    /// Starts a fresh game keeping the current mode.
    pub fn restart(&mut self) -> &GameState {
        self.reset(self.state.mode())
    }

    /// Applies the current player's mark at a raw cell index.
    ///
    /// Preconditions, checked in order: the game must be in progress,
    /// the index in range, the cell empty.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`], [`MoveError::InvalidIndex`], or
    /// [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<&GameState, MoveError> {
        if self.state.status().is_over() {
            debug!(index, "move rejected, game already over");
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        self.place(pos)
    }

    /// Applies the current player's mark at a typed position.
    ///
    /// On success the status is recomputed from the board, and the turn
    /// passes to the other mark only while the game remains in progress.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] or [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn place(&mut self, pos: Position) -> Result<&GameState, MoveError> {
        if self.state.status().is_over() {
            debug!(position = %pos, "move rejected, game already over");
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            debug!(position = %pos, "move rejected, cell occupied");
            return Err(MoveError::CellOccupied(pos));
        }

        let mov = Move::new(self.state.current_player(), pos);
        self.state.record(mov);

        let status = rules::evaluate(self.state.board());
        self.state.set_status(status);
        if !status.is_over() {
            self.state.advance_turn();
        }

        info!(%mov, status = ?status, "move applied");
        self.assert_consistent();
        Ok(&self.state)
    }

    /// Chooses the computer's reply for the current board and mode.
    ///
    /// `None` in two-player mode or when no empty cell remains.
    #[instrument(skip(self))]
    pub fn choose_computer_move(&mut self) -> Option<Position> {
        strategy::choose_move(self.state.board(), self.state.mode(), self.random.as_mut())
    }

    /// True when the computer owes a reply: a computer mode, the game
    /// in progress, and O to move.
    pub fn awaiting_computer(&self) -> bool {
        self.state.mode().is_computer()
            && !self.state.status().is_over()
            && self.state.current_player() == Mark::O
    }

    // Debug-build checks mirroring the alternation and history
    // invariants.
    fn assert_consistent(&self) {
        let squares = self.state.board().squares();
        let x_count = squares
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Mark::X)))
            .count();
        let o_count = squares
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Mark::O)))
            .count();
        debug_assert!(
            x_count == o_count || x_count == o_count + 1,
            "marks out of alternation: {x_count} X vs {o_count} O"
        );
        debug_assert_eq!(
            x_count + o_count,
            self.state.history().len(),
            "history out of step with board"
        );
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::GameStatus;
    use super::*;

    struct FixedFlip(bool);

    impl RandomSource for FixedFlip {
        fn coin_flip(&mut self) -> bool {
            self.0
        }

        fn pick(&mut self, _bound: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_status_derived_after_every_move() {
        let mut engine = GameEngine::new(GameMode::TwoPlayer);
        for index in [0, 3, 1, 4] {
            let state = engine.apply_move(index).expect("legal move");
            assert_eq!(state.status(), GameStatus::InProgress);
        }
        let state = engine.apply_move(2).expect("winning move");
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_winner_keeps_the_turn_marker() {
        let mut engine = GameEngine::new(GameMode::TwoPlayer);
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).expect("legal move");
        }
        assert_eq!(engine.state().current_player(), Mark::X);
    }

    #[test]
    fn test_awaiting_computer_tracks_turn_and_mode() {
        let mut engine =
            GameEngine::with_random(GameMode::VsComputer, Box::new(FixedFlip(true)));
        assert!(!engine.awaiting_computer());
        engine.apply_move(4).expect("human move");
        assert!(engine.awaiting_computer());

        let pos = engine.choose_computer_move().expect("reply available");
        engine.place(pos).expect("computer move");
        assert!(!engine.awaiting_computer());
    }

    #[test]
    fn test_two_player_has_no_computer_move() {
        let mut engine = GameEngine::new(GameMode::TwoPlayer);
        engine.apply_move(0).expect("legal move");
        assert_eq!(engine.choose_computer_move(), None);
        assert!(!engine.awaiting_computer());
    }
}
