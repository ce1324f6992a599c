//! Pawn move generation.
//!
//! Single and double pushes, diagonal captures, en-passant captures onto the
//! tracked target square, and promotion flagging on the far rank. Promotion
//! moves are emitted once per destination with the queen as default piece;
//! the caller picks another piece before applying if it wants one.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    let side = piece.color;
    let forward = side.forward();

    // A pawn on the far rank cannot exist in play; nothing to generate.
    let Some(one_step) = from.offset(forward, 0) else {
        return;
    };

    if game_state.get_piece(one_step).is_none() {
        out.push(pawn_move(game_state, from, one_step, piece));

        if from.rank == side.pawn_start_rank() {
            if let Some(two_step) = one_step.offset(forward, 0) {
                if game_state.get_piece(two_step).is_none() {
                    out.push(Move::new(game_state, from, two_step, piece));
                }
            }
        }
    }

    for d_file in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_file) else {
            continue;
        };
        match game_state.get_piece(to) {
            Some(target) if target.color != side => {
                out.push(pawn_move(game_state, from, to, piece));
            }
            None if game_state.en_passant_target == Some(to) => {
                out.push(Move::en_passant(game_state, from, to, piece));
            }
            _ => {}
        }
    }
}

fn pawn_move(game_state: &GameState, from: Square, to: Square, piece: Piece) -> Move {
    if to.rank == piece.color.promotion_rank() {
        Move::promotion(game_state, from, to, piece)
    } else {
        Move::new(game_state, from, to, piece)
    }
}
