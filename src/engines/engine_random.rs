//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{engine_rng, Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: engine_rng(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, _game_state: &mut GameState, legal_moves: &[Move]) -> EngineOutput {
        let mut out = EngineOutput {
            candidates: legal_moves.len(),
            ..EngineOutput::default()
        };
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        out.best_move = legal_moves.choose(&mut self.rng).cloned();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn picks_a_legal_move_and_is_reproducible_when_seeded() {
        let mut game = GameState::new_game();
        let legal = legal_moves(&mut game);

        let first = RandomEngine::new(Some(42)).choose_move(&mut game, &legal);
        let second = RandomEngine::new(Some(42)).choose_move(&mut game, &legal);
        let picked = first.best_move.expect("start position has moves");
        assert!(legal.contains(&picked));
        assert_eq!(Some(picked), second.best_move);
        assert_eq!(first.candidates, 20);
    }

    #[test]
    fn empty_move_set_gives_no_move() {
        let mut game = GameState::new_game();
        assert!(RandomEngine::default().choose_move(&mut game, &[]).best_move.is_none());
    }
}
