//! Standard algebraic notation for played moves.
//!
//! Disambiguation between two like pieces reaching the same square is not
//! rendered.

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;

/// Suffix appended to a move that leaves the opponent stalemated or ends the
/// game under the fifty-move rule.
pub const DRAW_MARKER: char = 'S';

impl Move {
    /// FIDE-style SAN: `O-O`, `e4`, `exd5`, `e8=Q`, `Nf3`, `Bxc6`, suffixed with
    /// `#`, the draw marker, or `+` (checked in that order).
    pub fn notation(&self) -> String {
        let mut out = if self.is_castling {
            if self.is_kingside_castle() {
                "O-O".to_owned()
            } else {
                "O-O-O".to_owned()
            }
        } else if self.piece_moved.kind == PieceKind::Pawn {
            let mut pawn = String::new();
            if self.is_capture() {
                pawn.push(self.start.file_char());
                pawn.push('x');
            }
            pawn.push_str(&self.end.to_string());
            if self.is_promotion {
                pawn.push('=');
                pawn.push(self.promotion_piece.letter());
            }
            pawn
        } else {
            let mut piece = String::new();
            piece.push(self.piece_moved.kind.letter());
            if self.is_capture() {
                piece.push('x');
            }
            piece.push_str(&self.end.to_string());
            piece
        };

        if self.is_checkmate {
            out.push('#');
        } else if self.is_stalemate {
            out.push(DRAW_MARKER);
        } else if self.is_check {
            out.push('+');
        }
        out
    }
}
