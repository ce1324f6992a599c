//! Strategy selector and the one-call search entry point.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    Random,
    Greedy,
    Minimax,
    Negamax,
    NegamaxAlphaBeta,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 5] = [
        SearchStrategy::Random,
        SearchStrategy::Greedy,
        SearchStrategy::Minimax,
        SearchStrategy::Negamax,
        SearchStrategy::NegamaxAlphaBeta,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SearchStrategy::Random => "random",
            SearchStrategy::Greedy => "greedy",
            SearchStrategy::Minimax => "minimax",
            SearchStrategy::Negamax => "negamax",
            SearchStrategy::NegamaxAlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SearchStrategy::Random),
            "greedy" => Ok(SearchStrategy::Greedy),
            "minimax" => Ok(SearchStrategy::Minimax),
            "negamax" => Ok(SearchStrategy::Negamax),
            "alphabeta" | "alpha-beta" | "negamax-alpha-beta" => {
                Ok(SearchStrategy::NegamaxAlphaBeta)
            }
            _ => Err(ChessError::UnknownStrategy(s.to_owned())),
        }
    }
}

pub fn build_engine(config: &EngineConfig) -> Box<dyn Engine> {
    let EngineConfig {
        strategy,
        depth,
        seed,
    } = *config;
    match strategy {
        SearchStrategy::Random => Box::new(RandomEngine::new(seed)),
        SearchStrategy::Greedy => Box::new(GreedyEngine::new(seed)),
        SearchStrategy::Minimax => Box::new(MinimaxEngine::new(depth, seed)),
        SearchStrategy::Negamax => Box::new(NegamaxEngine::new(depth, false, seed)),
        SearchStrategy::NegamaxAlphaBeta => Box::new(NegamaxEngine::new(depth, true, seed)),
    }
}

/// Runs `strategy` synchronously on the calling thread. Returns `None` only
/// for an empty move set.
pub fn find_best_move(
    strategy: SearchStrategy,
    game_state: &mut GameState,
    legal_moves: &[Move],
    depth: u8,
) -> Option<Move> {
    let mut engine = build_engine(&EngineConfig {
        strategy,
        depth,
        seed: None,
    });
    let out = engine.choose_move(game_state, legal_moves);
    for line in &out.info_lines {
        debug!(engine = engine.name(), "{line}");
    }
    out.best_move
}
