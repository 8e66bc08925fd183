//! Canonical chess-rule constants.
//!
//! Home squares, castling squares and clock limits. Squares are expressed as
//! zero-based (file, rank) pairs and converted on demand.

use crate::game_state::chess_types::{CastlingSide, Color, PromotionPiece, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plies without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_RULE_HALFMOVES: u32 = 100;

/// Kind substituted for promotions while trying candidate moves.
pub const TRIAL_PROMOTION: PromotionPiece = PromotionPiece::Queen;

const KING_FILE: u8 = 4;

#[inline]
pub const fn home_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_starting_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// The rank a pawn of `color` promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// The rank of an en-passant target that `color` may capture onto.
#[inline]
pub const fn en_passant_capture_rank(color: Color) -> u8 {
    match color {
        Color::White => 5,
        Color::Black => 2,
    }
}

pub fn starting_king_square(color: Color) -> Square {
    Square::new(KING_FILE, home_rank(color))
}

pub fn rook_home_square(color: Color, side: CastlingSide) -> Square {
    let file = match side {
        CastlingSide::Kingside => 7,
        CastlingSide::Queenside => 0,
    };
    Square::new(file, home_rank(color))
}

/// Where the king lands when castling.
pub fn castling_king_target(color: Color, side: CastlingSide) -> Square {
    let file = match side {
        CastlingSide::Kingside => 6,
        CastlingSide::Queenside => 2,
    };
    Square::new(file, home_rank(color))
}

/// Where the rook lands when castling. Also the square the king crosses.
pub fn castling_rook_target(color: Color, side: CastlingSide) -> Square {
    let file = match side {
        CastlingSide::Kingside => 5,
        CastlingSide::Queenside => 3,
    };
    Square::new(file, home_rank(color))
}

/// Squares between king and rook that must be empty to castle.
pub fn castling_intermediate_squares(color: Color, side: CastlingSide) -> Vec<Square> {
    let files: &[u8] = match side {
        CastlingSide::Kingside => &[5, 6],
        CastlingSide::Queenside => &[1, 2, 3],
    };
    files
        .iter()
        .map(|&file| Square::new(file, home_rank(color)))
        .collect()
}

/// The castling side a king move from `source` to `target` would be, if any.
pub fn castling_side_for(color: Color, source: Square, target: Square) -> Option<CastlingSide> {
    if source != starting_king_square(color) {
        return None;
    }
    CastlingSide::ALL
        .into_iter()
        .find(|&side| castling_king_target(color, side) == target)
}
