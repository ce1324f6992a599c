//! Mailbox board state for a single game session.
//!
//! `GameState` is the one mutable aggregate of the rules engine. It stores the
//! 8x8 cell grid, the side to move, the applied/undone move stacks, and the
//! rule-tracking attributes together with the history stacks that let
//! `undo_move` restore them exactly.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{BACK_RANK, FIFTY_MOVE_PLY_LIMIT};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [rank][file]
    pub cells: [[Option<Piece>; 8]; 8],

    pub side_to_move: Color,

    // --- Move stacks ---
    pub move_history: Vec<Move>,
    pub redo_history: Vec<Move>,

    // --- Rule tracking ---
    pub castle_rights: CastleRights,
    /// Rights in force before each entry of `move_history`.
    pub castle_rights_history: Vec<CastleRights>,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
    /// Clock value before each entry of `move_history`.
    pub halfmove_history: Vec<u16>,
    pub fullmove_number: u16,

    // --- Derived outcome flags ---
    pub checkmate: bool,
    pub stalemate: bool,
    pub fifty_move_draw: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            cells: [[None; 8]; 8],
            side_to_move: Color::Light,

            move_history: Vec::new(),
            redo_history: Vec::new(),

            castle_rights: CastleRights::NONE,
            castle_rights_history: Vec::new(),
            en_passant_target: None,
            halfmove_clock: 0,
            halfmove_history: Vec::new(),
            fullmove_number: 1,

            checkmate: false,
            stalemate: false,
            fifty_move_draw: false,
        }
    }
}

impl GameState {
    /// Empty board, Light to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut state = Self::default();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for color in [Color::Light, Color::Dark] {
                state.add_piece(Square::new(color.home_rank(), file), Piece::new(color, *kind));
                state.add_piece(
                    Square::new(color.pawn_start_rank(), file),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        state.castle_rights = CastleRights::ALL;
        state
    }

    /// Builds a position from eight rows, rank 8 first. `PNBRQK` are Light,
    /// lower case Dark, `.` an empty cell. No en-passant target is set.
    pub fn from_diagram(rows: [&str; 8], side: Color, rights: CastleRights) -> ChessResult<Self> {
        let mut state = Self::default();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.chars().count() != 8 {
                return Err(ChessError::InvalidDiagram((*row).to_owned()));
            }
            let rank = 7 - row_idx as u8;
            for (file, ch) in row.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_letter(ch)
                    .ok_or_else(|| ChessError::InvalidDiagram((*row).to_owned()))?;
                let color = if ch.is_ascii_uppercase() {
                    Color::Light
                } else {
                    Color::Dark
                };
                state.add_piece(Square::new(rank, file as u8), Piece::new(color, kind));
            }
        }
        state.side_to_move = side;
        state.castle_rights = rights;
        Ok(state)
    }

    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.cells[square.rank as usize][square.file as usize]
    }

    /// Overwrites whatever occupies `square`.
    #[inline]
    pub fn add_piece(&mut self, square: Square, piece: Piece) {
        self.cells[square.rank as usize][square.file as usize] = Some(piece);
    }

    /// Clears `square` and hands back what was there.
    #[inline]
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.rank as usize][square.file as usize].take()
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, square: Square, contents: Option<Piece>) {
        self.cells[square.rank as usize][square.file as usize] = contents;
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(color, PieceKind::King));
        Square::all().find(|sq| self.get_piece(*sq) == king)
    }

    /// Occupied squares holding `color`'s pieces, in a1..h8 order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get_piece(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate || self.fifty_move_draw
    }

    #[inline]
    pub(crate) fn refresh_fifty_move_flag(&mut self) {
        self.fifty_move_draw = self.halfmove_clock >= FIFTY_MOVE_PLY_LIMIT;
    }
}
