//! One-ply greedy engine.
//!
//! Plays each legal move, scores the resulting position for the mover, and
//! picks at random among the best. A mating move scores `CHECKMATE_SCORE`,
//! a drawing one zero.

use std::sync::Arc;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{engine_rng, Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::terminal_score;
use crate::search::search_context::SearchContext;
use crate::search::threading::SharedSearchState;

pub struct GreedyEngine {
    rng: StdRng,
    shared: Option<Arc<SharedSearchState>>,
}

impl GreedyEngine {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: engine_rng(seed),
            shared: None,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn attach_shared_state(&mut self, shared: Arc<SharedSearchState>) {
        self.shared = Some(shared);
    }

    fn choose_move(&mut self, game_state: &mut GameState, legal: &[Move]) -> EngineOutput {
        let mover = game_state.side_to_move;
        let mut ctx = SearchContext::new(1, self.shared.clone());

        for mv in legal {
            if !ctx.enter_node() {
                break;
            }
            make_move(game_state, mv);
            legal_moves(game_state);
            let score = mover.sign() * terminal_score(game_state);
            unmake_move(game_state);
            ctx.record_root(mv, score, true);
        }

        let outcome = ctx.into_outcome();
        let mut out = EngineOutput {
            best_move: outcome.candidates.choose(&mut self.rng).cloned(),
            best_score: outcome.best_score,
            nodes: outcome.nodes,
            candidates: outcome.candidates.len(),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "greedy_engine score {:?} ties {}",
            outcome.best_score, out.candidates
        ));
        out
    }
}
