//! Computer move selection: the biased opening picker and the win/block
//! probe used by the smart mode.

use super::position::Position;
use super::rules::{WINNING_LINES, check_winner};
use super::types::{Board, GameMode, Mark, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Randomness seam for strategy selection.
///
/// The opening picker needs one fair coin flip (which ordering to try)
/// and an occasional uniform draw. Injecting the source keeps both
/// paths deterministic under test.
pub trait RandomSource {
    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;

    /// Uniform draw from `0..bound`. Callers guarantee `bound >= 1`.
    fn pick(&mut self, bound: usize) -> usize;
}

/// [`RandomSource`] backed by `rand`'s standard RNG.
#[derive(Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// OS-seeded source.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed source for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn pick(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

// The two opening orderings the picker flips between, each with the
// cells tried once its primary list is exhausted.
const OPENING_A: [Position; 3] = [Position::TopLeft, Position::TopRight, Position::BottomRight];
const FALLBACK_A: [Position; 3] = [Position::TopCenter, Position::Center, Position::MiddleRight];
const OPENING_B: [Position; 3] = [Position::BottomLeft, Position::BottomRight, Position::TopRight];
const FALLBACK_B: [Position; 3] = [
    Position::BottomCenter,
    Position::MiddleRight,
    Position::Center,
];

/// Chooses the computer's move for the given mode.
///
/// `TwoPlayer` has no computer seat and always yields `None`; the
/// computer modes yield `None` only when no empty cell remains.
#[instrument(skip(random))]
pub fn choose_move(
    board: &Board,
    mode: GameMode,
    random: &mut dyn RandomSource,
) -> Option<Position> {
    match mode {
        GameMode::TwoPlayer => None,
        GameMode::VsComputer => heuristic_move(board, random),
        GameMode::VsComputerSmart => winning_move(board, Mark::O)
            .or_else(|| winning_move(board, Mark::X))
            .or_else(|| heuristic_move(board, random)),
    }
}

/// Lowest-index empty cell that completes a line for `mark`, if any.
///
/// One ply of lookahead: place the mark on a copy, check, discard. The
/// smart mode probes its own mark to take a win and the opponent's to
/// block one.
#[instrument]
pub fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    for pos in Position::valid_moves(board) {
        let mut probe = board.clone();
        probe.set(pos, Square::Occupied(mark));
        if check_winner(&probe) == Some(mark) {
            debug!(%mark, position = %pos, "found completing move");
            return Some(pos);
        }
    }
    None
}

/// The biased opening picker.
///
/// Flips between two preference orderings, falls back to a uniform draw
/// when both lists are exhausted, then lets any line holding two X
/// marks and a single empty cell override the choice. Later qualifying
/// lines overwrite earlier ones.
#[instrument(skip(random))]
pub fn heuristic_move(board: &Board, random: &mut dyn RandomSource) -> Option<Position> {
    let open = Position::valid_moves(board);
    if open.is_empty() {
        return None;
    }

    let (primary, fallback) = if random.coin_flip() {
        (OPENING_A, FALLBACK_A)
    } else {
        (OPENING_B, FALLBACK_B)
    };

    let mut chosen = first_empty(board, &primary)
        .or_else(|| first_empty(board, &fallback))
        .unwrap_or_else(|| open[random.pick(open.len())]);

    for line in WINNING_LINES {
        let x_count = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(Mark::X))
            .count();
        // Two X marks leave exactly one other cell; if it is open, the
        // block takes precedence over whatever was picked above.
        if x_count == 2 {
            if let Some(cell) = line.iter().copied().find(|pos| board.is_empty(*pos)) {
                chosen = cell;
            }
        }
    }

    debug!(position = %chosen, "picked move");
    Some(chosen)
}

fn first_empty(board: &Board, ordering: &[Position]) -> Option<Position> {
    ordering.iter().copied().find(|pos| board.is_empty(*pos))
}
