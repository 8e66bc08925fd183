use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::rook_moves::is_rook_move;

#[inline]
pub fn is_queen_move(source: Square, target: Square) -> bool {
    is_bishop_move(source, target) || is_rook_move(source, target)
}
