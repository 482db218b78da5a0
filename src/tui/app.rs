//! UI-side session state: the input-event contract with the engine.

use super::input;
use crate::game::{GameEngine, GameMode, Position};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

/// Per-session UI state.
///
/// Translates cell activations, mode selection, and restarts into
/// engine calls, and owns the "reply pending" latch that keeps input
/// quiet while the computer's scheduled move is in flight.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    status_line: String,
    reply_pending: bool,
}

impl App {
    /// New session around an engine.
    pub fn new(engine: GameEngine) -> Self {
        let mode = engine.mode();
        Self {
            engine,
            cursor: Position::Center,
            status_line: format!("{} - X to move", mode.name()),
            reply_pending: false,
        }
    }

    /// The engine, for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cursor cell for keyboard navigation.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status line.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Whether the end-of-game prompt should be visible.
    pub fn show_new_game_prompt(&self) -> bool {
        self.engine.state().status().is_over()
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// A human activated a cell.
    ///
    /// Rejected moves are silent no-ops. Returns `true` when a computer
    /// reply should be scheduled: a computer mode, the game still
    /// running, and O to move. Activations are ignored outright while a
    /// reply is already pending.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn activate_cell(&mut self, pos: Position) -> bool {
        if self.reply_pending {
            debug!("ignoring activation while computer reply is pending");
            return false;
        }
        match self.engine.place(pos) {
            Ok(_) => {
                self.refresh_status();
                if self.engine.awaiting_computer() {
                    self.reply_pending = true;
                    return true;
                }
                false
            }
            Err(err) => {
                // Occupied cell or finished board: the board simply
                // stays as it is.
                debug!(%err, "activation rejected");
                false
            }
        }
    }

    /// The scheduled computer reply is due. Never re-schedules.
    ///
    /// A stale event (the user restarted or switched mode while the
    /// reply was in flight) finds the computer no longer on turn and
    /// does nothing.
    #[instrument(skip(self))]
    pub fn computer_turn(&mut self) {
        self.reply_pending = false;
        if !self.engine.awaiting_computer() {
            debug!("stale computer turn, nothing to do");
            return;
        }
        let Some(pos) = self.engine.choose_computer_move() else {
            warn!("computer turn with no available move");
            return;
        };
        if let Err(err) = self.engine.place(pos) {
            warn!(%err, position = %pos, "computer move rejected");
            return;
        }
        self.refresh_status();
    }

    /// Switches mode, starting a fresh game.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: GameMode) {
        self.engine.reset(mode);
        self.reply_pending = false;
        self.status_line = format!("{} - X to move", mode.name());
    }

    /// Advances to the next mode in the cycle.
    pub fn cycle_mode(&mut self) {
        self.select_mode(self.engine.mode().cycle());
    }

    /// Restarts in the current mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let mode = self.engine.mode();
        self.engine.restart();
        self.reply_pending = false;
        self.status_line = format!("{} - X to move", mode.name());
    }

    fn refresh_status(&mut self) {
        let state = self.engine.state();
        self.status_line = if state.status().is_over() {
            state.status().text()
        } else {
            format!("{} to move", state.current_player())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Mark, RandomSource, Square};

    struct FixedFlip(bool);

    impl RandomSource for FixedFlip {
        fn coin_flip(&mut self) -> bool {
            self.0
        }

        fn pick(&mut self, _bound: usize) -> usize {
            0
        }
    }

    fn computer_app() -> App {
        App::new(GameEngine::with_random(
            GameMode::VsComputer,
            Box::new(FixedFlip(true)),
        ))
    }

    fn mark_count(app: &App, mark: Mark) -> usize {
        app.engine()
            .state()
            .board()
            .squares()
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    #[test]
    fn test_two_player_never_requests_reply() {
        let mut app = App::new(GameEngine::new(GameMode::TwoPlayer));
        assert!(!app.activate_cell(Position::Center));
        assert!(!app.activate_cell(Position::TopLeft));
    }

    #[test]
    fn test_computer_mode_requests_reply_after_human_move() {
        let mut app = computer_app();
        assert!(app.activate_cell(Position::Center));
    }

    #[test]
    fn test_activations_ignored_while_reply_pending() {
        let mut app = computer_app();
        assert!(app.activate_cell(Position::Center));
        assert!(!app.activate_cell(Position::TopLeft));
        assert_eq!(mark_count(&app, Mark::X), 1);
    }

    #[test]
    fn test_computer_turn_places_o_and_clears_latch() {
        let mut app = computer_app();
        app.activate_cell(Position::Center);
        app.computer_turn();
        assert_eq!(mark_count(&app, Mark::O), 1);

        // Input is live again.
        assert!(app.activate_cell(Position::BottomCenter));
    }

    #[test]
    fn test_stale_computer_turn_after_restart_is_a_no_op() {
        let mut app = computer_app();
        app.activate_cell(Position::Center);
        app.restart();
        app.computer_turn();
        assert_eq!(mark_count(&app, Mark::X), 0);
        assert_eq!(mark_count(&app, Mark::O), 0);
    }

    #[test]
    fn test_select_mode_resets_the_board() {
        let mut app = App::new(GameEngine::new(GameMode::TwoPlayer));
        app.activate_cell(Position::Center);
        app.select_mode(GameMode::VsComputerSmart);
        assert_eq!(mark_count(&app, Mark::X), 0);
        assert_eq!(app.engine().mode(), GameMode::VsComputerSmart);
        assert!(!app.show_new_game_prompt());
    }

    #[test]
    fn test_occupied_cell_activation_is_silent() {
        let mut app = App::new(GameEngine::new(GameMode::TwoPlayer));
        app.activate_cell(Position::Center);
        assert!(!app.activate_cell(Position::Center));
        assert_eq!(mark_count(&app, Mark::X), 1);
        assert_eq!(mark_count(&app, Mark::O), 0);
    }
}
