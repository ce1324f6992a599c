//! Engine abstraction layer used by the game session and the search worker.
//!
//! Every strategy takes a board and its legal moves and returns one move,
//! picking uniformly at random among equally scored candidates.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::threading::SharedSearchState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when the move set was empty.
    pub best_move: Option<Move>,
    /// Root score in the engine's own convention; `None` for engines that
    /// do not score.
    pub best_score: Option<i32>,
    pub nodes: u64,
    /// Size of the tied set the move was drawn from.
    pub candidates: usize,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Hands the engine the stop flag of the worker running it.
    fn attach_shared_state(&mut self, _shared: Arc<SharedSearchState>) {}

    /// Chooses among `legal_moves`, which must be the legal moves of
    /// `game_state`. The board may be used as scratch space but is restored
    /// before returning.
    fn choose_move(&mut self, game_state: &mut GameState, legal_moves: &[Move]) -> EngineOutput;
}

/// Tie-break generator: reproducible when seeded, OS-seeded otherwise.
pub fn engine_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
