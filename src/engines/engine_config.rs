//! Engine configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! - `CHESS_DUEL_STRATEGY`: `random`, `greedy`, `minimax`, `negamax` or `alphabeta`
//! - `CHESS_DUEL_DEPTH`: search depth in plies, at least 1
//! - `CHESS_DUEL_SEED`: tie-break seed for reproducible games

use std::env;

use crate::engines::engine_select::SearchStrategy;
use crate::errors::{ChessError, ChessResult};

pub const STRATEGY_ENV: &str = "CHESS_DUEL_STRATEGY";
pub const DEPTH_ENV: &str = "CHESS_DUEL_DEPTH";
pub const SEED_ENV: &str = "CHESS_DUEL_SEED";

pub const DEFAULT_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub strategy: SearchStrategy,
    pub depth: u8,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::NegamaxAlphaBeta,
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> ChessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(STRATEGY_ENV) {
            config.strategy = value.parse()?;
        }
        if let Some(value) = lookup(DEPTH_ENV) {
            config.depth = parse_depth(&value)?;
        }
        if let Some(value) = lookup(SEED_ENV) {
            config.seed = Some(value.trim().parse().map_err(|_| ChessError::InvalidConfig {
                key: SEED_ENV,
                value: value.clone(),
            })?);
        }
        Ok(config)
    }
}

fn parse_depth(value: &str) -> ChessResult<u8> {
    match value.trim().parse::<u8>() {
        Ok(depth) if depth >= 1 => Ok(depth),
        _ => Err(ChessError::InvalidConfig {
            key: DEPTH_ENV,
            value: value.to_owned(),
        }),
    }
}
