use crate::game_state::chess_types::*;

/// Rule-state snapshot taken around trial moves.
///
/// Holds only the scalar fields a make/unmake pair could disturb; the move
/// stacks themselves are restored by `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub castle_rights: CastleRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub checkmate: bool,
    pub stalemate: bool,
    pub fifty_move_draw: bool,
}

impl UndoState {
    #[inline]
    pub fn capture(game_state: &GameState) -> Self {
        Self {
            castle_rights: game_state.castle_rights,
            en_passant_target: game_state.en_passant_target,
            halfmove_clock: game_state.halfmove_clock,
            fullmove_number: game_state.fullmove_number,
            checkmate: game_state.checkmate,
            stalemate: game_state.stalemate,
            fifty_move_draw: game_state.fifty_move_draw,
        }
    }

    #[inline]
    pub fn restore(self, game_state: &mut GameState) {
        game_state.castle_rights = self.castle_rights;
        game_state.en_passant_target = self.en_passant_target;
        game_state.halfmove_clock = self.halfmove_clock;
        game_state.fullmove_number = self.fullmove_number;
        game_state.checkmate = self.checkmate;
        game_state.stalemate = self.stalemate;
        game_state.fifty_move_draw = self.fifty_move_draw;
    }
}
