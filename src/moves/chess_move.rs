//! Single-ply move descriptor.
//!
//! A `Move` is built by the generator against one specific `GameState`: it
//! freezes the moved and captured pieces at construction time and is stale
//! once the board changes. Input layers that only know two squares build a
//! `ProvisionalMove` and resolve it against the current legal-move set to get
//! the fully flagged move before applying it.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Eq)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,

    pub is_en_passant: bool,
    pub is_promotion: bool,
    pub promotion_piece: PieceKind,
    pub is_castling: bool,

    // Notation-only annotations, set after the move is played.
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

impl Move {
    /// Plain move or capture; the captured piece is read from `end`.
    pub fn new(game_state: &GameState, start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: game_state.get_piece(end),
            is_en_passant: false,
            is_promotion: false,
            promotion_piece: PieceKind::Queen,
            is_castling: false,
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
        }
    }

    /// En-passant capture. The landing square is empty, so the captured pawn is
    /// derived from the mover's color.
    pub fn en_passant(
        game_state: &GameState,
        start: Square,
        end: Square,
        piece_moved: Piece,
    ) -> Self {
        let mut mv = Self::new(game_state, start, end, piece_moved);
        mv.is_en_passant = true;
        mv.piece_captured = Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn));
        mv
    }

    pub fn promotion(
        game_state: &GameState,
        start: Square,
        end: Square,
        piece_moved: Piece,
    ) -> Self {
        let mut mv = Self::new(game_state, start, end, piece_moved);
        mv.is_promotion = true;
        mv
    }

    pub fn castling(
        game_state: &GameState,
        start: Square,
        end: Square,
        piece_moved: Piece,
    ) -> Self {
        let mut mv = Self::new(game_state, start, end, piece_moved);
        mv.is_castling = true;
        mv
    }

    /// Chooses the promotion piece. Ignored for non-promotion moves.
    pub fn with_promotion_piece(mut self, kind: PieceKind) -> ChessResult<Self> {
        match kind {
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.promotion_piece = kind;
                Ok(self)
            }
            PieceKind::Pawn | PieceKind::King => Err(ChessError::InvalidPromotion(kind.letter())),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.rank.abs_diff(self.end.rank) == 2
    }

    #[inline]
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castling && self.end.file > self.start.file
    }

    /// Square of the pawn removed by an en-passant capture: the landing file on
    /// the mover's starting rank.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        Square::new(self.start.rank, self.end.file)
    }

    /// `(from, to)` of the rook that travels with a castling king.
    pub fn castling_rook_squares(&self) -> (Square, Square) {
        let rank = self.start.rank;
        if self.is_kingside_castle() {
            (Square::new(rank, 7), Square::new(rank, self.end.file - 1))
        } else {
            (Square::new(rank, 0), Square::new(rank, self.end.file + 1))
        }
    }

    /// UCI-style coordinates, e.g. `e2e4` or `e7e8q`.
    pub fn long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.start, self.end);
        if self.is_promotion {
            out.push(self.promotion_piece.letter().to_ascii_lowercase());
        }
        out
    }
}

/// Identity is the pair of squares so a bare GUI move matches the generator's
/// fully flagged move.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

/// Coordinates-only move, the first phase of the two-phase protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionalMove {
    pub start: Square,
    pub end: Square,
}

impl ProvisionalMove {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }

    /// Finds the matching legal move and returns a copy carrying its flags.
    pub fn resolve(self, legal_moves: &[Move]) -> ChessResult<Move> {
        legal_moves
            .iter()
            .find(|mv| mv.start == self.start && mv.end == self.end)
            .cloned()
            .ok_or(ChessError::IllegalMove {
                from: self.start,
                to: self.end,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::test_support::sq;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn equality_ignores_flags() {
        let game = GameState::new_game();
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let plain = Move::new(&game, sq("e2"), sq("e4"), pawn);
        let mut flagged = plain.clone();
        flagged.is_check = true;
        flagged.is_promotion = true;
        assert_eq!(plain, flagged);
        assert_ne!(plain, Move::new(&game, sq("e2"), sq("e3"), pawn));
    }

    #[test]
    fn provisional_move_resolves_to_the_flagged_legal_move() {
        let mut game = GameState::new_game();
        let legal = legal_moves(&mut game);

        let resolved = ProvisionalMove::new(sq("g1"), sq("f3"))
            .resolve(&legal)
            .expect("Nf3 should be legal");
        assert_eq!(resolved.piece_moved, Piece::new(Color::Light, PieceKind::Knight));

        let err = ProvisionalMove::new(sq("e2"), sq("e5"))
            .resolve(&legal)
            .expect_err("e2e5 is not a legal pawn move");
        assert!(matches!(err, ChessError::IllegalMove { .. }));
    }

    #[test]
    fn promotion_piece_must_be_a_minor_or_major_piece() {
        let game = GameState::new_empty();
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let mv = Move::promotion(&game, sq("a7"), sq("a8"), pawn);
        assert_eq!(mv.promotion_piece, PieceKind::Queen);
        assert_eq!(mv.long_algebraic(), "a7a8q");

        let knight = mv.clone().with_promotion_piece(PieceKind::Knight).expect("knight is allowed");
        assert_eq!(knight.long_algebraic(), "a7a8n");
        assert!(mv.with_promotion_piece(PieceKind::King).is_err());
    }
}
