//! Check detection by ray casting from the king.
//!
//! No opponent moves are generated. From the king's square each of the eight
//! rays is scanned to the first occupied square, and the eight knight offsets
//! are probed for an enemy knight.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{ALL_DIRECTIONS, KNIGHT_OFFSETS};

/// True when the side to move has its king attacked.
#[inline]
pub fn in_check(game_state: &GameState) -> bool {
    king_in_check(game_state, game_state.side_to_move)
}

/// True when `color`'s king is attacked. A board without that king is never
/// in check.
pub fn king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    let enemy = color.opposite();

    for (index, &(d_rank, d_file)) in ALL_DIRECTIONS.iter().enumerate() {
        let diagonal = index < 4;
        let mut distance = 0u8;
        let mut cursor = king_sq;
        while let Some(next) = cursor.offset(d_rank, d_file) {
            distance += 1;
            cursor = next;
            let Some(piece) = game_state.get_piece(next) else {
                continue;
            };
            if piece.color == enemy
                && ray_attacker(piece.kind, diagonal, distance, d_rank == color.forward())
            {
                return true;
            }
            break;
        }
    }

    KNIGHT_OFFSETS.iter().any(|&(d_rank, d_file)| {
        king_sq
            .offset(d_rank, d_file)
            .and_then(|sq| game_state.get_piece(sq))
            == Some(Piece::new(enemy, PieceKind::Knight))
    })
}

/// Whether an enemy `kind` first met on a ray attacks the king.
///
/// `toward_enemy` is set when the ray heads the way the king's own pawns
/// advance, which is where an enemy pawn has to stand to capture it. An
/// adjacent enemy king counts so that kings can never move next to each other.
fn ray_attacker(kind: PieceKind, diagonal: bool, distance: u8, toward_enemy: bool) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Bishop => diagonal,
        PieceKind::Rook => !diagonal,
        PieceKind::Pawn => diagonal && distance == 1 && toward_enemy,
        PieceKind::King => distance == 1,
        PieceKind::Knight => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::test_support::position_from_rows;

    fn light_to_move(rows: [&str; 8]) -> GameState {
        position_from_rows(rows, Color::Light, CastleRights::NONE)
    }

    #[test]
    fn start_position_is_quiet() {
        assert!(!in_check(&GameState::new_game()));
    }

    #[test]
    fn sliders_check_only_along_their_own_rays() {
        let rook_on_file = light_to_move([
            "....r..k", "........", "........", "........", "........", "........",
            "........", "....K...",
        ]);
        assert!(in_check(&rook_on_file));

        let rook_on_diagonal = light_to_move([
            ".......k", "........", "........", "r.......", "........", "........",
            "........", "....K...",
        ]);
        assert!(!in_check(&rook_on_diagonal));

        let bishop_on_diagonal = light_to_move([
            ".......k", "b.......", "........", "........", "........", "........",
            "........", "....K...",
        ]);
        // a7 is off e1's diagonals, a5 is on one.
        assert!(!in_check(&bishop_on_diagonal));
        let bishop_on_a5 = light_to_move([
            ".......k", "........", "........", "b.......", "........", "........",
            "........", "....K...",
        ]);
        assert!(in_check(&bishop_on_a5));
    }

    #[test]
    fn blockers_stop_rays() {
        let blocked = light_to_move([
            "....q..k", "........", "........", "....P...", "........", "........",
            "........", "....K...",
        ]);
        assert!(!in_check(&blocked));
    }

    #[test]
    fn pawns_check_only_forward_diagonally_at_distance_one() {
        let dark_pawn_ahead = light_to_move([
            ".......k", "........", "........", "........", "........", "........",
            "...p....", "....K...",
        ]);
        assert!(in_check(&dark_pawn_ahead));

        let dark_pawn_behind = position_from_rows(
            [
                ".......k", "........", "........", "........", "........", "....K...",
                "...p....", "........",
            ],
            Color::Light,
            CastleRights::NONE,
        );
        assert!(!in_check(&dark_pawn_behind));

        let light_pawn_below_dark_king = position_from_rows(
            [
                "........", "....k...", "...P....", "........", "........", "........",
                "........", "K.......",
            ],
            Color::Dark,
            CastleRights::NONE,
        );
        assert!(in_check(&light_pawn_below_dark_king));
    }

    #[test]
    fn knights_and_adjacent_kings_count() {
        let knight = light_to_move([
            ".......k", "........", "........", "........", "........", "...n....",
            "........", "....K...",
        ]);
        assert!(in_check(&knight));

        let kings_touching = light_to_move([
            "........", "........", "........", "........", "........", "........",
            "....k...", "....K...",
        ]);
        assert!(in_check(&kings_touching));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let mut game = GameState::new_empty();
        game.add_piece(Square::new(0, 0), Piece::new(Color::Dark, PieceKind::Queen));
        assert!(!in_check(&game));
    }
}
