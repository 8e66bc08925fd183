//! Pawn movement shape, ignoring occupancy.
//!
//! Captures, en-passant and blocked double pushes are decided by the
//! state-aware layer in `move_generation::legal_move_checks`.

use crate::game_state::chess_rules::pawn_starting_rank;
use crate::game_state::chess_types::{Color, Square};

/// Forward one rank always; forward two from the starting rank; one file
/// sideways only together with one rank forward (the capture shape).
pub fn is_pawn_move(source: Square, target: Square, color: Color) -> bool {
    let file_diff = (target.file() as i8 - source.file() as i8).abs();
    let rank_diff = (target.rank() as i8 - source.rank() as i8) * color.sign();

    match file_diff {
        0 if source.rank() == pawn_starting_rank(color) => rank_diff == 1 || rank_diff == 2,
        0 | 1 => rank_diff == 1,
        _ => false,
    }
}
