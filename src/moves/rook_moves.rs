use crate::game_state::chess_types::Square;

/// Exactly one of file and rank changes.
#[inline]
pub fn is_rook_move(source: Square, target: Square) -> bool {
    (source.rank() == target.rank()) != (source.file() == target.file())
}
