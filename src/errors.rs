//! Errors used throughout the rules engine.
//!
//! Two kinds of failure exist:
//!
//! - Malformed external input (a FEN string, a square or move typed by a
//!   person, a move source returning something it was not offered). These are
//!   returned as `ChessError` so the caller decides what to do.
//! - Broken internal invariants (an en-passant target with no pawn behind it,
//!   an undo with nothing to undo, castling without a rook). These indicate a
//!   defect in generation or application and abort through
//!   [`invariant_violation`].

use std::fmt;

use thiserror::Error;

use crate::moves::chess_move::Move;

/// Unified recoverable error type for the rules engine.
#[derive(Error, Debug)]
pub enum ChessError {
    /// The FEN string could not be decoded into a position.
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A square was not a file letter `a`-`h` followed by a rank digit `1`-`8`.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A move was not in the four-character `e2e4` form.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// A move source returned a move it was not offered.
    #[error("move source returned {mv} which is not a legal move in '{fen}' (history: {history})")]
    MoveNotInLegalList {
        mv: Move,
        fen: String,
        history: String,
    },

    /// A replayed move is not legal in the current position.
    #[error("illegal move {mv} in '{fen}'")]
    IllegalMove { mv: Move, fen: String },

    /// A move source was asked to choose from an empty list.
    #[error("no legal moves to choose from")]
    NoLegalMoves,

    /// The text input of a move source was closed.
    #[error("input closed before a move was entered")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

/// Diagnostic payload for a broken internal invariant.
#[derive(Debug, Clone, Default)]
pub struct InvariantViolation {
    pub what: String,
    pub fen: Option<String>,
    pub moves: Vec<Move>,
}

impl InvariantViolation {
    pub fn new(what: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            ..Self::default()
        }
    }

    pub fn with_fen(mut self, fen: impl Into<String>) -> Self {
        self.fen = Some(fen.into());
        self
    }

    pub fn with_moves(mut self, moves: &[Move]) -> Self {
        self.moves = moves.to_vec();
        self
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.what)?;
        if let Some(fen) = &self.fen {
            write!(f, " [fen: {fen}]")?;
        }
        if !self.moves.is_empty() {
            write!(f, " [moves: {}]", format_move_list(&self.moves))?;
        }
        Ok(())
    }
}

/// Abort on a broken invariant after logging its context.
#[cold]
#[track_caller]
pub fn invariant_violation(violation: InvariantViolation) -> ! {
    tracing::error!(
        what = %violation.what,
        fen = violation.fen.as_deref().unwrap_or("-"),
        moves = %format_move_list(&violation.moves),
        "internal invariant violated"
    );
    panic!("invariant violated: {violation}");
}

/// Space-separated move texts, used in diagnostics.
pub fn format_move_list(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
