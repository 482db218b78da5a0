//! Noughts - terminal tic-tac-toe.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts::{GameEngine, GameMode, StdRandom};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output never fights the terminal UI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let mode: GameMode = cli.mode.into();
    info!(?mode, seed = ?cli.seed, "starting noughts");

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_random(mode, Box::new(StdRandom::seeded(seed))),
        None => GameEngine::new(mode),
    };

    noughts::tui::run(engine).await
}
