//! Negamax engine, optionally with alpha-beta pruning.
//!
//! Both settings choose from the same candidate set, so with a fixed seed
//! they pick the same move; pruning only saves nodes.

use std::sync::Arc;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{engine_rng, Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::negamax::{negamax_alpha_beta_search, negamax_search};
use crate::search::threading::SharedSearchState;

pub struct NegamaxEngine {
    depth: u8,
    pruning: bool,
    rng: StdRng,
    shared: Option<Arc<SharedSearchState>>,
}

impl NegamaxEngine {
    pub fn new(depth: u8, pruning: bool, seed: Option<u64>) -> Self {
        Self {
            depth: depth.max(1),
            pruning,
            rng: engine_rng(seed),
            shared: None,
        }
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        if self.pruning {
            "Negamax alpha-beta"
        } else {
            "Negamax"
        }
    }

    fn attach_shared_state(&mut self, shared: Arc<SharedSearchState>) {
        self.shared = Some(shared);
    }

    fn choose_move(&mut self, game_state: &mut GameState, legal_moves: &[Move]) -> EngineOutput {
        let shared = self.shared.clone();
        let outcome = if self.pruning {
            negamax_alpha_beta_search(game_state, legal_moves, self.depth, shared)
        } else {
            negamax_search(game_state, legal_moves, self.depth, shared)
        };

        let mut out = EngineOutput {
            best_move: outcome.candidates.choose(&mut self.rng).cloned(),
            best_score: outcome.best_score,
            nodes: outcome.nodes,
            candidates: outcome.candidates.len(),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "{} depth {} score {:?} nodes {} ties {}",
            self.name(),
            self.depth,
            outcome.best_score,
            outcome.nodes,
            out.candidates
        ));
        out
    }
}
