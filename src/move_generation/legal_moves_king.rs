//! King move generation, including castling.
//!
//! Castling is offered when the right is intact, the squares between king and
//! rook are empty, the king is not in check, and the square the king passes
//! over is not attacked. The landing square is left to the legality filter.

use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_shared::{push_step_moves, ALL_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(
    game_state: &mut GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    push_step_moves(game_state, from, piece, &ALL_DIRECTIONS, out);
    generate_castling_moves(game_state, from, piece, out);
}

fn generate_castling_moves(
    game_state: &mut GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    let side = piece.color;
    let rights = game_state.castle_rights;
    if !rights.kingside(side) && !rights.queenside(side) {
        return;
    }
    if from != Square::new(side.home_rank(), KING_HOME_FILE) {
        return;
    }

    // Cannot castle out of check. The probe looks at the side to move.
    if game_state.side_to_move != side || in_check(game_state) {
        return;
    }

    let rank = side.home_rank();
    let rook = Some(Piece::new(side, PieceKind::Rook));

    if rights.kingside(side)
        && game_state.get_piece(Square::new(rank, 7)) == rook
        && files_empty(game_state, rank, &[5, 6])
        && !transit_attacked(game_state, from, Square::new(rank, 5), piece)
    {
        out.push(Move::castling(game_state, from, Square::new(rank, 6), piece));
    }

    if rights.queenside(side)
        && game_state.get_piece(Square::new(rank, 0)) == rook
        && files_empty(game_state, rank, &[1, 2, 3])
        && !transit_attacked(game_state, from, Square::new(rank, 3), piece)
    {
        out.push(Move::castling(game_state, from, Square::new(rank, 2), piece));
    }
}

fn files_empty(game_state: &GameState, rank: u8, files: &[u8]) -> bool {
    files
        .iter()
        .all(|&file| game_state.get_piece(Square::new(rank, file)).is_none())
}

/// Steps the king onto `transit`, asks the check detector, and steps it back.
fn transit_attacked(
    game_state: &mut GameState,
    from: Square,
    transit: Square,
    king: Piece,
) -> bool {
    game_state.remove_piece(from);
    game_state.add_piece(transit, king);
    let attacked = in_check(game_state);
    game_state.remove_piece(transit);
    game_state.add_piece(from, king);
    attacked
}
