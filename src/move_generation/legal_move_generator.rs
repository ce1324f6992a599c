//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves piece by piece, then plays each one in place,
//! asks the check detector whether the mover's own king is exposed, and takes
//! it back. This filter is the only legality gate; the per-piece generators
//! never reject self-check on their own.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Moves obeying piece movement rules for the side to move. They may leave
/// the mover's king in check.
///
/// Takes `&mut` because castling probes relocate the king for a moment; the
/// board is unchanged on return.
pub fn pseudo_legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let side = game_state.side_to_move;
    let own: Vec<(Square, Piece)> = game_state.pieces_of(side).collect();

    let mut pseudo = Vec::with_capacity(64);
    for (from, piece) in own {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, &mut pseudo),
            PieceKind::Knight => generate_knight_moves(game_state, from, piece, &mut pseudo),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, &mut pseudo),
            PieceKind::Rook => generate_rook_moves(game_state, from, piece, &mut pseudo),
            PieceKind::Queen => generate_queen_moves(game_state, from, piece, &mut pseudo),
            PieceKind::King => generate_king_moves(game_state, from, piece, &mut pseudo),
        }
    }
    pseudo
}

/// Legal moves for the side to move.
///
/// Also refreshes `checkmate` and `stalemate`: both are cleared when a move
/// exists, otherwise exactly one is set depending on whether the side to
/// move is in check.
pub fn legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let snapshot = UndoState::capture(game_state);
    let mover = game_state.side_to_move;

    let pseudo = pseudo_legal_moves(game_state);
    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        make_move(game_state, &mv);
        game_state.side_to_move = mover;
        let exposed = in_check(game_state);
        game_state.side_to_move = mover.opposite();
        unmake_move(game_state);

        if !exposed {
            legal.push(mv);
        }
    }
    snapshot.restore(game_state);

    if legal.is_empty() {
        let checked = in_check(game_state);
        game_state.checkmate = checked;
        game_state.stalemate = !checked;
    } else {
        game_state.checkmate = false;
        game_state.stalemate = false;
    }
    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::test_support::{position_from_rows, sq};
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::moves::chess_move::ProvisionalMove;

    fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
        moves.iter().any(|mv| mv.start == sq(from) && mv.end == sq(to))
    }

    #[test]
    fn startpos_has_twenty_moves_and_leaves_board_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(legal_moves(&mut game).len(), 20);
        assert_eq!(game, before);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut game = position_from_rows(
            [
                "....r..k", "........", "........", "........", "........", "........",
                "....B...", "....K...",
            ],
            Color::Light,
            CastleRights::NONE,
        );
        let pseudo = pseudo_legal_moves(&mut game);
        assert!(has_move(&pseudo, "e2", "d3"));

        let legal = legal_moves(&mut game);
        assert!(legal.iter().all(|mv| mv.start != sq("e2")));
    }

    #[test]
    fn castling_is_refused_out_of_through_or_into_blocked_squares() {
        let open = position_from_rows(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "R...K..R",
            ],
            Color::Light,
            CastleRights::ALL,
        );
        let mut game = open.clone();
        let legal = legal_moves(&mut game);
        assert!(has_move(&legal, "e1", "g1"));
        assert!(has_move(&legal, "e1", "c1"));

        // King in check.
        let mut checked = position_from_rows(
            [
                "....k...", "........", "........", "........", "....r...", "........",
                "........", "R...K..R",
            ],
            Color::Light,
            CastleRights::ALL,
        );
        let legal = legal_moves(&mut checked);
        assert!(!has_move(&legal, "e1", "g1"));
        assert!(!has_move(&legal, "e1", "c1"));

        // Transit square f1 attacked; d1 is not.
        let mut transit = position_from_rows(
            [
                "....k...", "........", "........", "........", ".....r..", "........",
                "........", "R...K..R",
            ],
            Color::Light,
            CastleRights::ALL,
        );
        let legal = legal_moves(&mut transit);
        assert!(!has_move(&legal, "e1", "g1"));
        assert!(has_move(&legal, "e1", "c1"));

        // Landing square g1 attacked is caught by the legality filter.
        let mut landing = position_from_rows(
            [
                "....k...", "........", "........", "........", "......r.", "........",
                "........", "R...K..R",
            ],
            Color::Light,
            CastleRights::ALL,
        );
        let legal = legal_moves(&mut landing);
        assert!(!has_move(&legal, "e1", "g1"));

        // Occupied b1 blocks only the long castle.
        let mut blocked = position_from_rows(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "RN..K..R",
            ],
            Color::Light,
            CastleRights::ALL,
        );
        let legal = legal_moves(&mut blocked);
        assert!(has_move(&legal, "e1", "g1"));
        assert!(!has_move(&legal, "e1", "c1"));

        // No rights, no castling.
        let mut revoked = open;
        revoked.castle_rights = CastleRights::NONE;
        let legal = legal_moves(&mut revoked);
        assert!(!has_move(&legal, "e1", "g1"));
        assert!(!has_move(&legal, "e1", "c1"));
    }

    #[test]
    fn fools_mate_is_checkmate_with_hash_suffix() {
        let mut game = GameState::new_game();
        let script = [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")];
        for (from, to) in script {
            let legal = legal_moves(&mut game);
            let mv = ProvisionalMove::new(sq(from), sq(to))
                .resolve(&legal)
                .expect("scripted move should be legal");
            apply_move(&mut game, &mv);
        }

        assert!(legal_moves(&mut game).is_empty());
        assert!(game.checkmate);
        assert!(!game.stalemate);

        // The session layer annotates the final move; mimic it here.
        let last = game.move_history.last_mut().expect("four moves were played");
        last.is_checkmate = true;
        assert_eq!(last.notation(), "Qh4#");
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let mut game = position_from_rows(
            [
                "k.......", "..Q.....", ".K......", "........", "........", "........",
                "........", "........",
            ],
            Color::Dark,
            CastleRights::NONE,
        );
        assert!(legal_moves(&mut game).is_empty());
        assert!(game.stalemate);
        assert!(!game.checkmate);
    }

    #[test]
    fn kings_never_step_next_to_each_other() {
        let mut game = position_from_rows(
            [
                "........", "........", "........", "....k...", "........", "....K...",
                "........", "........",
            ],
            Color::Light,
            CastleRights::NONE,
        );
        let legal = legal_moves(&mut game);
        for target in ["d4", "e4", "f4"] {
            assert!(!has_move(&legal, "e3", target), "king walked onto {target}");
        }
        assert!(has_move(&legal, "e3", "e2"));
    }
}
