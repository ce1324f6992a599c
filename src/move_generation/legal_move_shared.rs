//! Direction tables and walking helpers shared by the per-piece generators
//! and the check detector.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// `(d_rank, d_file)` diagonal rays.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// `(d_rank, d_file)` orthogonal rays.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Diagonals first, then orthogonals. The check detector relies on this order
/// to tell the two direction classes apart by index.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

/// Walks each ray from `from` until the edge, an own piece (excluded), or an
/// enemy piece (included, then stop).
pub fn push_sliding_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_rank, d_file) {
            match game_state.get_piece(to) {
                None => out.push(Move::new(game_state, from, to, piece)),
                Some(other) if other.color != piece.color => {
                    out.push(Move::new(game_state, from, to, piece));
                    break;
                }
                Some(_) => break,
            }
            cursor = to;
        }
    }
}

/// One step along each offset, skipping squares held by own pieces.
pub fn push_step_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in offsets {
        let Some(to) = from.offset(d_rank, d_file) else {
            continue;
        };
        match game_state.get_piece(to) {
            Some(other) if other.color == piece.color => {}
            _ => out.push(Move::new(game_state, from, to, piece)),
        }
    }
}
