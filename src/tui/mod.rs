//! Terminal frontend: rendering, input, and computer-turn scheduling.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::game::{GameEngine, Position};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// How long the computer "thinks" before replying, so the human's mark
/// renders first.
const COMPUTER_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Events delivered to the UI loop outside of key input.
#[derive(Debug, Clone, Copy)]
enum UiEvent {
    /// A scheduled computer reply is due.
    ComputerTurn,
}

/// Runs the terminal UI until the user quits.
pub async fn run(engine: GameEngine) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, engine).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    engine: GameEngine,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(engine);

    info!("starting UI loop");

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Scheduled replies first, then input.
        while let Ok(UiEvent::ComputerTurn) = rx.try_recv() {
            app.computer_turn();
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("user quit");
                    return Ok(());
                }
                KeyCode::Char('r') => app.restart(),
                KeyCode::Char('m') => app.cycle_mode(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(pos) = digit_to_position(c) {
                        if app.activate_cell(pos) {
                            schedule_computer_turn(tx.clone());
                        }
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let pos = app.cursor();
                    if app.activate_cell(pos) {
                        schedule_computer_turn(tx.clone());
                    }
                }
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                    app.move_cursor(key.code);
                }
                _ => {}
            }
        }
    }
}

/// One-shot deferred reply: lets the human's mark hit the screen before
/// the computer answers. Only human activations schedule it; the
/// computer turn itself never does.
fn schedule_computer_turn(tx: mpsc::UnboundedSender<UiEvent>) {
    debug!(
        delay_ms = COMPUTER_REPLY_DELAY.as_millis() as u64,
        "scheduling computer reply"
    );
    tokio::spawn(async move {
        tokio::time::sleep(COMPUTER_REPLY_DELAY).await;
        let _ = tx.send(UiEvent::ComputerTurn);
    });
}

/// Maps the keys 1-9 onto cells 0-8.
fn digit_to_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    if (1..=9).contains(&digit) {
        Position::from_index(digit - 1)
    } else {
        None
    }
}
