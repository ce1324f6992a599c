//! In-place move application with exact reversal.
//!
//! `make_move`/`unmake_move` carry the forward and inverse board logic and
//! leave `redo_history` alone, so the legality filter, perft and the search
//! can probe moves without disturbing it. `apply_move`, `undo_move` and
//! `redo_move` are the player-facing wrappers that maintain the redo stack.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// Plays a legal move and discards any undone line.
pub fn apply_move(game_state: &mut GameState, mv: &Move) {
    make_move(game_state, mv);
    game_state.redo_history.clear();
}

/// Takes back the last move and parks it on the redo stack. Returns `None`
/// when there is nothing to undo.
pub fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let mv = unmake_move(game_state)?;
    game_state.redo_history.push(mv.clone());
    Some(mv)
}

/// Replays the most recently undone move. Returns `None` when the redo stack
/// is empty.
pub fn redo_move(game_state: &mut GameState) -> Option<Move> {
    let mv = game_state.redo_history.pop()?;
    make_move(game_state, &mv);
    Some(mv)
}

pub(crate) fn make_move(game_state: &mut GameState, mv: &Move) {
    let mover = mv.piece_moved.color;

    // Board.
    game_state.remove_piece(mv.start);
    let placed = if mv.is_promotion {
        Piece::new(mover, mv.promotion_piece)
    } else {
        mv.piece_moved
    };
    game_state.add_piece(mv.end, placed);

    if mv.is_en_passant {
        game_state.remove_piece(mv.en_passant_capture_square());
    }
    if mv.is_castling {
        let (rook_from, rook_to) = mv.castling_rook_squares();
        if let Some(rook) = game_state.remove_piece(rook_from) {
            game_state.add_piece(rook_to, rook);
        }
    }

    game_state.move_history.push(mv.clone());
    game_state.side_to_move = mover.opposite();

    game_state.en_passant_target = if mv.is_double_pawn_push() {
        Some(Square::new((mv.start.rank + mv.end.rank) / 2, mv.start.file))
    } else {
        None
    };

    // Castling rights only ever turn off here.
    game_state.castle_rights_history.push(game_state.castle_rights);
    match mv.piece_moved.kind {
        PieceKind::King => game_state.castle_rights.revoke_both(mover),
        PieceKind::Rook => game_state.castle_rights.revoke_for_rook_square(mover, mv.start),
        _ => {}
    }
    if let Some(captured) = mv.piece_captured {
        if captured.kind == PieceKind::Rook {
            game_state
                .castle_rights
                .revoke_for_rook_square(captured.color, mv.end);
        }
    }

    // Clocks.
    game_state.halfmove_history.push(game_state.halfmove_clock);
    if mv.is_capture() || mv.piece_moved.kind == PieceKind::Pawn {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    game_state.refresh_fifty_move_flag();

    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
}

pub(crate) fn unmake_move(game_state: &mut GameState) -> Option<Move> {
    let mv = game_state.move_history.pop()?;
    let mover = mv.piece_moved.color;

    game_state.add_piece(mv.start, mv.piece_moved);
    if mv.is_en_passant {
        game_state.remove_piece(mv.end);
        game_state.set_cell(mv.en_passant_capture_square(), mv.piece_captured);
    } else {
        game_state.set_cell(mv.end, mv.piece_captured);
    }
    if mv.is_castling {
        let (rook_from, rook_to) = mv.castling_rook_squares();
        if let Some(rook) = game_state.remove_piece(rook_to) {
            game_state.add_piece(rook_from, rook);
        }
    }

    game_state.side_to_move = mover;

    game_state.en_passant_target = game_state
        .move_history
        .last()
        .filter(|prev| prev.is_double_pawn_push())
        .map(|prev| Square::new((prev.start.rank + prev.end.rank) / 2, prev.start.file));

    if let Some(rights) = game_state.castle_rights_history.pop() {
        game_state.castle_rights = rights;
    }

    game_state.checkmate = false;
    game_state.stalemate = false;

    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1);
    }

    if let Some(clock) = game_state.halfmove_history.pop() {
        game_state.halfmove_clock = clock;
    }
    game_state.refresh_fifty_move_flag();

    Some(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::test_support::{position_from_rows, sq};
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::moves::chess_move::ProvisionalMove;

    fn play(game: &mut GameState, from: &str, to: &str) -> Move {
        let legal = legal_moves(game);
        let mv = ProvisionalMove::new(sq(from), sq(to))
            .resolve(&legal)
            .expect("scripted move should be legal");
        apply_move(game, &mv);
        mv
    }

    #[test]
    fn every_opening_move_undoes_to_an_identical_state() {
        let mut game = GameState::new_game();
        let before = game.clone();
        for mv in legal_moves(&mut game) {
            apply_move(&mut game, &mv);
            undo_move(&mut game);
            game.redo_history.clear();
            assert_eq!(game, before, "{} did not undo cleanly", mv.long_algebraic());
        }
    }

    #[test]
    fn double_push_sets_and_undo_clears_en_passant_target() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        assert_eq!(game.en_passant_target, Some(sq("e3")));
        assert_eq!(game.halfmove_clock, 0);

        play(&mut game, "g8", "f6");
        assert_eq!(game.en_passant_target, None);
        assert_eq!(game.halfmove_clock, 1);
        assert_eq!(game.fullmove_number, 2);

        undo_move(&mut game);
        assert_eq!(game.en_passant_target, Some(sq("e3")));
        assert_eq!(game.fullmove_number, 1);
        assert_eq!(game.halfmove_clock, 0);
    }

    #[test]
    fn en_passant_removes_the_pawn_beside_the_capturer() {
        let mut game = GameState::new_game();
        play(&mut game, "a2", "a3");
        play(&mut game, "d7", "d5");
        play(&mut game, "a3", "a4");
        play(&mut game, "d5", "d4");
        play(&mut game, "e2", "e4");
        assert_eq!(game.en_passant_target, Some(sq("e3")));

        let capture = play(&mut game, "d4", "e3");
        assert!(capture.is_en_passant);
        assert_eq!(game.get_piece(sq("e4")), None);
        assert_eq!(
            game.get_piece(sq("e3")),
            Some(Piece::new(Color::Dark, PieceKind::Pawn))
        );

        undo_move(&mut game);
        assert_eq!(
            game.get_piece(sq("e4")),
            Some(Piece::new(Color::Light, PieceKind::Pawn))
        );
        assert_eq!(game.get_piece(sq("e3")), None);
        assert_eq!(game.en_passant_target, Some(sq("e3")));
    }

    #[test]
    fn castling_moves_the_rook_and_clears_rights() {
        let mut game = position_from_rows(
            [
                "r...k..r", "pppppppp", "........", "........", "........", "........",
                "PPPPPPPP", "R...K..R",
            ],
            Color::Light,
            CastleRights::ALL,
        );
        let castle = play(&mut game, "e1", "g1");
        assert!(castle.is_castling);
        assert_eq!(
            game.get_piece(sq("f1")),
            Some(Piece::new(Color::Light, PieceKind::Rook))
        );
        assert_eq!(game.get_piece(sq("h1")), None);
        assert!(!game.castle_rights.light_kingside);
        assert!(!game.castle_rights.light_queenside);
        assert!(game.castle_rights.dark_kingside);

        undo_move(&mut game);
        assert_eq!(game.castle_rights, CastleRights::ALL);
        assert_eq!(
            game.get_piece(sq("h1")),
            Some(Piece::new(Color::Light, PieceKind::Rook))
        );

        // Redo replays the forward logic exactly.
        redo_move(&mut game).expect("castle should be redoable");
        assert_eq!(game.get_piece(sq("g1")), Some(Piece::new(Color::Light, PieceKind::King)));
        assert!(!game.castle_rights.light_kingside);
    }

    #[test]
    fn capturing_a_home_rook_clears_the_victims_right() {
        let mut game = position_from_rows(
            [
                "r...k..r", "........", "........", "........", "........", "........",
                "........", "R...K..R",
            ],
            Color::Light,
            CastleRights::ALL,
        );
        play(&mut game, "a1", "a8");
        assert!(!game.castle_rights.light_queenside);
        assert!(!game.castle_rights.dark_queenside);
        assert!(game.castle_rights.dark_kingside);
        assert!(game.castle_rights.light_kingside);
    }

    #[test]
    fn promotion_places_the_chosen_piece() {
        let mut game = position_from_rows(
            [
                "....k...", "P.......", "........", "........", "........", "........",
                "........", "....K...",
            ],
            Color::Light,
            CastleRights::NONE,
        );
        let legal = legal_moves(&mut game);
        let promo = ProvisionalMove::new(sq("a7"), sq("a8"))
            .resolve(&legal)
            .expect("promotion should be legal")
            .with_promotion_piece(PieceKind::Rook)
            .expect("rook is a valid promotion");
        apply_move(&mut game, &promo);
        assert_eq!(game.get_piece(sq("a8")), Some(Piece::new(Color::Light, PieceKind::Rook)));

        undo_move(&mut game);
        assert_eq!(game.get_piece(sq("a7")), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(game.get_piece(sq("a8")), None);
    }

    #[test]
    fn new_move_after_undo_discards_redo_line() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        undo_move(&mut game);
        assert_eq!(game.redo_history.len(), 1);
        play(&mut game, "d2", "d4");
        assert!(game.redo_history.is_empty());
        assert!(redo_move(&mut game).is_none());
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert!(undo_move(&mut game).is_none());
        assert_eq!(game, before);
    }

    #[test]
    fn fifty_quiet_plies_raise_the_draw_flag() {
        let mut game = position_from_rows(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "N...K...",
            ],
            Color::Light,
            CastleRights::NONE,
        );
        game.halfmove_clock = 49;
        play(&mut game, "a1", "b3");
        assert_eq!(game.halfmove_clock, 50);
        assert!(game.fifty_move_draw);
        assert!(!game.stalemate);

        undo_move(&mut game);
        assert_eq!(game.halfmove_clock, 49);
        assert!(!game.fifty_move_draw);
    }
}
