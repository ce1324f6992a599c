//! Fixed-depth minimax engine.
//!
//! Scores stay white-positive, so the root maximizes for White and minimizes
//! for Black.

use std::sync::Arc;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{engine_rng, Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::minimax::minimax_search;
use crate::search::threading::SharedSearchState;

/// Fixed-depth minimax. Reports white-positive scores.
pub struct MinimaxEngine {
    depth: u8,
    rng: StdRng,
    shared: Option<Arc<SharedSearchState>>,
}

impl MinimaxEngine {
    pub fn new(depth: u8, seed: Option<u64>) -> Self {
        Self {
            depth: depth.max(1),
            rng: engine_rng(seed),
            shared: None,
        }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn attach_shared_state(&mut self, shared: Arc<SharedSearchState>) {
        self.shared = Some(shared);
    }

    fn choose_move(&mut self, game_state: &mut GameState, legal_moves: &[Move]) -> EngineOutput {
        let outcome = minimax_search(game_state, legal_moves, self.depth, self.shared.clone());

        let mut out = EngineOutput {
            best_move: outcome.candidates.choose(&mut self.rng).cloned(),
            best_score: outcome.best_score,
            nodes: outcome.nodes,
            candidates: outcome.candidates.len(),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "minimax depth {} score {:?} nodes {} ties {}",
            self.depth, outcome.best_score, outcome.nodes, out.candidates
        ));
        out
    }
}
