//! Rook move generation.
//!
//! Emits pseudo-legal rook moves along ranks and files, including the first
//! enemy piece met on each ray.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_sliding_moves, ORTHOGONAL_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    push_sliding_moves(game_state, from, piece, &ORTHOGONAL_DIRECTIONS, out);
}
