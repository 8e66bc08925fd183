//! 8x8 grid of pieces addressed by square.
//!
//! The board knows nothing about legality: `make_move` relocates whatever is
//! on the source square. Callers establish legality first.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_board_field;
use crate::utils::fen_parser::parse_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Piece; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [Piece::EMPTY; 64],
        }
    }

    /// Decode the piece-placement field of a FEN string.
    pub fn from_fen(placement: &str) -> Result<Self, String> {
        parse_board(placement)
    }

    /// Encode as the piece-placement field of a FEN string.
    pub fn to_fen(&self) -> String {
        generate_board_field(self)
    }

    #[inline]
    pub fn square(&self, square: Square) -> Piece {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = piece;
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.set(square, Piece::EMPTY);
    }

    /// Relocate the piece on `mv.source` to `mv.target` and clear the source.
    pub fn make_move(&mut self, mv: Move) {
        self.squares[mv.target.index()] = self.squares[mv.source.index()];
        self.squares[mv.source.index()] = Piece::EMPTY;
    }

    /// Occupied squares with their pieces, `a1` first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(|square| (square, self.square(square)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(square, _)| square)
    }
}
