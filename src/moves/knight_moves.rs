use crate::game_state::chess_types::Square;

#[inline]
pub fn is_knight_move(source: Square, target: Square) -> bool {
    let rank_diff = (target.rank() as i8 - source.rank() as i8).abs();
    let file_diff = (target.file() as i8 - source.file() as i8).abs();

    matches!((rank_diff, file_diff), (1, 2) | (2, 1))
}
