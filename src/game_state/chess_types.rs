//! Value types shared by every layer of the rules engine.
//!
//! Pieces are a single signed value (positive = White, negative = Black,
//! zero = empty square) so a board is just 64 small integers and color tests
//! are a sign comparison.

use std::fmt;
use std::str::FromStr;

use crate::errors::{invariant_violation, ChessError, InvariantViolation};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// `+1` for White, `-1` for Black. Also the forward rank direction.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Zero-based index, `Pawn == 0` .. `King == 5`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    #[inline]
    pub const fn from_magnitude(value: u8) -> Option<Self> {
        match value {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter.
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// The kinds a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }
}

/// Signed piece value: positive White, negative Black, zero empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(i8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece(kind as i8 * color.sign())
    }

    #[inline]
    pub const fn value(self) -> i8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        if self.0 > 0 {
            Some(Color::White)
        } else if self.0 < 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_magnitude(self.0.unsigned_abs())
    }

    /// True only for a non-empty piece of color `color`.
    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 * color.sign() > 0
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self == Piece::new(kind, color)
    }

    /// FEN glyph, uppercase for White. Calling this on an empty square is a bug.
    pub fn fen_char(self) -> char {
        match (self.kind(), self.color()) {
            (Some(kind), Some(Color::White)) => kind.fen_char().to_ascii_uppercase(),
            (Some(kind), Some(Color::Black)) => kind.fen_char(),
            _ => invariant_violation(InvariantViolation::new(
                "requested the FEN glyph of an empty square",
            )),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_fen_char(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }
}

/// Board coordinate, linear index `rank * 8 + file` with `a1 == 0`, `h8 == 63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Build from zero-based file and rank. Out-of-range coordinates are a bug.
    #[track_caller]
    pub fn new(file: u8, rank: u8) -> Self {
        if file > 7 || rank > 7 {
            invariant_violation(InvariantViolation::new(format!(
                "square coordinates out of range: file {file}, rank {rank}"
            )));
        }
        Square(rank * 8 + file)
    }

    #[track_caller]
    pub fn from_index(index: u8) -> Self {
        if index > 63 {
            invariant_violation(InvariantViolation::new(format!(
                "square index out of range: {index}"
            )));
        }
        Square(index)
    }

    /// Every square, `a1` first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// The square `d_file`/`d_rank` away, if still on the board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let file = self.file() as i8 + d_file;
        let rank = self.rank() as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastlingSide::Kingside => 0,
            CastlingSide::Queenside => 1,
        }
    }
}

/// Per color, per side: "the king and that rook have not moved yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    // [color][side]
    rights: [[bool; 2]; 2],
}

impl CastlingRights {
    pub const fn none() -> Self {
        Self {
            rights: [[false; 2]; 2],
        }
    }

    pub const fn all() -> Self {
        Self {
            rights: [[true; 2]; 2],
        }
    }

    #[inline]
    pub const fn has(&self, color: Color, side: CastlingSide) -> bool {
        self.rights[color.index()][side.index()]
    }

    pub fn grant(&mut self, color: Color, side: CastlingSide) {
        self.rights[color.index()][side.index()] = true;
    }

    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        self.rights[color.index()][side.index()] = false;
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.rights[color.index()] = [false; 2];
    }
}

/// Outcome of a game. `Ongoing` is the only non-terminal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    WhiteWins,
    BlackWins,
    Stalemate,
    Draw,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub const fn win_for(winner: Color) -> Self {
        match winner {
            Color::White => GameStatus::WhiteWins,
            Color::Black => GameStatus::BlackWins,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::WhiteWins => "white wins!",
            GameStatus::BlackWins => "black wins!",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_sign_encodes_color() {
        let white_knight = Piece::new(PieceKind::Knight, Color::White);
        let black_queen = Piece::new(PieceKind::Queen, Color::Black);

        assert_eq!(white_knight.value(), 2);
        assert_eq!(black_queen.value(), -5);
        assert_eq!(white_knight.color(), Some(Color::White));
        assert_eq!(black_queen.color(), Some(Color::Black));
        assert_eq!(Piece::EMPTY.color(), None);
        assert_eq!(black_queen.kind(), Some(PieceKind::Queen));
        assert_eq!(Piece::EMPTY.kind(), None);
    }

    #[test]
    fn is_color_requires_a_piece() {
        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(white_pawn.is_color(Color::White));
        assert!(!white_pawn.is_color(Color::Black));
        assert!(!Piece::EMPTY.is_color(Color::White));
        assert!(!Piece::EMPTY.is_color(Color::Black));
    }

    #[test]
    fn fen_glyphs_follow_color_case() {
        assert_eq!(Piece::new(PieceKind::King, Color::White).fen_char(), 'K');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).fen_char(), 'n');
        assert_eq!(
            Piece::from_fen_char('R'),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    #[should_panic(expected = "empty square")]
    fn empty_piece_has_no_fen_glyph() {
        let _ = Piece::EMPTY.fen_char();
    }

    #[test]
    fn square_coordinates_and_offsets() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        assert_eq!(e4.index(), 28);
        assert_eq!((e4.file(), e4.rank()), (4, 3));
        assert_eq!(e4.offset(1, 1).map(|s| s.to_string()), Some("f5".to_owned()));
        assert_eq!(Square::new(7, 7).offset(1, 0), None);
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn square_out_of_range_is_a_contract_violation() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn castling_rights_are_revoked_per_side() {
        let mut rights = CastlingRights::all();
        rights.revoke(Color::White, CastlingSide::Queenside);
        assert!(rights.has(Color::White, CastlingSide::Kingside));
        assert!(!rights.has(Color::White, CastlingSide::Queenside));

        rights.revoke_all(Color::Black);
        assert!(!rights.has(Color::Black, CastlingSide::Kingside));
        assert!(!rights.has(Color::Black, CastlingSide::Queenside));
    }

    #[test]
    fn only_ongoing_is_non_terminal() {
        assert!(!GameStatus::Ongoing.is_terminal());
        for status in [
            GameStatus::WhiteWins,
            GameStatus::BlackWins,
            GameStatus::Stalemate,
            GameStatus::Draw,
        ] {
            assert!(status.is_terminal());
        }
    }
}
