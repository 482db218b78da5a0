//! Command-line interface.

use clap::{Parser, ValueEnum};
use noughts::GameMode;
use std::path::PathBuf;

/// Noughts - terminal tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with an optional computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent for the O seat.
    #[arg(short, long, value_enum, default_value_t = Mode::TwoPlayer)]
    pub mode: Mode,

    /// Seed for the computer's random source (reproducible games).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file; the terminal itself is taken over by the UI.
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}

/// CLI-facing mode names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two humans at one keyboard.
    TwoPlayer,
    /// Computer opponent using the biased-random strategy.
    Computer,
    /// Computer opponent that takes wins and blocks losses.
    ComputerSmart,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::TwoPlayer => GameMode::TwoPlayer,
            Mode::Computer => GameMode::VsComputer,
            Mode::ComputerSmart => GameMode::VsComputerSmart,
        }
    }
}
