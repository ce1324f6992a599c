use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Queen moves are the union of bishop and rook moves from the same square.
pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    generate_bishop_moves(game_state, from, piece, out);
    generate_rook_moves(game_state, from, piece, out);
}
