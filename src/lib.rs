//! Crate root module declarations for the chess duel project.
//!
//! This file exposes all top-level subsystems (board state, moves, move
//! generation, search, engines, the game session, and utility helpers) so the
//! binary, benches, and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod notation;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod negamax;
    pub mod search_context;
    pub mod threading;
}

pub mod engines {
    pub mod engine_config;
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_select;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_log;
    pub mod render_game_state;
}
