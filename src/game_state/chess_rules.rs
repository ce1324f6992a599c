//! Canonical chess-rule constants.
//!
//! Static layout and counter limits used to initialize and judge a game.

use crate::game_state::chess_types::PieceKind;

/// Back-rank layout from file `a` to file `h`, shared by both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Plies without a capture or pawn move that end the game as a draw.
pub const FIFTY_MOVE_PLY_LIMIT: u16 = 50;

/// File the king starts on.
pub const KING_HOME_FILE: u8 = 4;
