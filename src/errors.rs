//! Errors raised around the rules engine.
//!
//! The rules engine itself never fails: applying a generated legal move is
//! infallible and undo/redo on an empty stack is a no-op. `ChessError` covers
//! the surfaces that take outside input: algebraic parsing, resolving a
//! coordinate-only move against the legal set, session misuse, configuration,
//! the search worker, and the diagnostic move log.

use thiserror::Error;

use crate::game_state::chess_types::Square;
use crate::session::game_session::GameOutcome;

#[derive(Error, Debug)]
pub enum ChessError {
    /// A square like `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A board diagram row is not eight cells of `PNBRQK`, `pnbrqk` or `.`.
    #[error("invalid board diagram row: {0:?}")]
    InvalidDiagram(String),

    /// The requested squares do not match any legal move.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// A promotion piece other than knight, bishop, rook or queen was asked for.
    #[error("cannot promote to {0}")]
    InvalidPromotion(char),

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("it is not an engine player's turn")]
    NotEngineTurn,

    #[error("game is already over: {0:?}")]
    GameOver(GameOutcome),

    #[error("a search is already running")]
    SearchInProgress,

    #[error("could not start search worker: {0}")]
    WorkerSpawn(std::io::Error),

    /// The worker thread exited without sending a reply.
    #[error("search worker disconnected before replying")]
    SearchWorkerDisconnected,

    #[error("a perft worker thread panicked")]
    PerftWorkerPanicked,

    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("move log I/O failed: {0}")]
    MoveLog(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;
