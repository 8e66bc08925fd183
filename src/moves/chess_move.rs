//! The move value type and its four-character text form (`e2e4`).
//!
//! A move is only a source/target pair. Capture, promotion and castling are
//! derived from the position when the move is applied.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: Square,
    pub target: Square,
}

impl Move {
    #[inline]
    pub const fn new(source: Square, target: Square) -> Self {
        Self { source, target }
    }

    #[inline]
    pub fn file_delta(&self) -> i8 {
        self.target.file() as i8 - self.source.file() as i8
    }

    #[inline]
    pub fn rank_delta(&self) -> i8 {
        self.target.rank() as i8 - self.source.rank() as i8
    }

    // Same ordering as comparing the text form: file letter, then rank digit.
    fn text_order_key(&self) -> (u8, u8, u8, u8) {
        (
            self.source.file(),
            self.source.rank(),
            self.target.file(),
            self.target.rank(),
        )
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text_order_key().cmp(&other.text_order_key())
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.target)
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ChessError::InvalidMoveText(s.to_owned()));
        }

        let source = s[0..2]
            .parse::<Square>()
            .map_err(|_| ChessError::InvalidMoveText(s.to_owned()))?;
        let target = s[2..4]
            .parse::<Square>()
            .map_err(|_| ChessError::InvalidMoveText(s.to_owned()))?;

        Ok(Move::new(source, target))
    }
}
