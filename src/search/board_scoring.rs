//! Static evaluation.
//!
//! Scores are white-positive: Light material counts up, Dark material counts
//! down. Searches that want the mover's point of view multiply by
//! `Color::sign`.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Magnitude of a decided game. Larger than any material balance.
pub const CHECKMATE_SCORE: i32 = 1000;

pub const STALEMATE_SCORE: i32 = 0;

/// Sum of piece values, Light minus Dark.
pub fn material_score(game_state: &GameState) -> i32 {
    Square::all()
        .filter_map(|sq| game_state.get_piece(sq))
        .map(|piece| piece.color.sign() * piece.kind.value())
        .sum()
}

/// Material, unless the game is decided.
///
/// Reads the outcome flags, so the legal-move set of `game_state` must have
/// been generated first. A mated Light side scores `-CHECKMATE_SCORE`, a mated
/// Dark side `+CHECKMATE_SCORE`; stalemate and the fifty-move draw score zero.
pub fn terminal_score(game_state: &GameState) -> i32 {
    if game_state.checkmate {
        -game_state.side_to_move.sign() * CHECKMATE_SCORE
    } else if game_state.stalemate || game_state.fifty_move_draw {
        STALEMATE_SCORE
    } else {
        material_score(game_state)
    }
}
