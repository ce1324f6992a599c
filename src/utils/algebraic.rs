//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the
//! `(rank, file)` squares used by the board, for notation and CLI input.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Square::new(rank - b'1', file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::new(7, 7));
        assert_eq!(algebraic_to_square("E4").expect("E4 should parse"), Square::new(3, 4));
        assert_eq!(square_to_algebraic(Square::new(0, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::new(7, 7)), "h8");
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["", "e", "e9", "i1", "e44", "4e"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad} should be rejected");
        }
    }
}
