//! King movement shape, including the two-file castling candidate.

use crate::game_state::chess_rules::castling_side_for;
use crate::game_state::chess_types::{Color, Square};

/// One step in any direction, or the castling shape from the king's original
/// square. Rights and occupancy are checked later.
pub fn is_king_move(source: Square, target: Square, color: Color) -> bool {
    let rank_diff = (target.rank() as i8 - source.rank() as i8).abs();
    let file_diff = (target.file() as i8 - source.file() as i8).abs();

    if source == target {
        return false;
    }
    if rank_diff <= 1 && file_diff <= 1 {
        return true;
    }

    castling_side_for(color, source, target).is_some()
}

#[cfg(test)]
mod tests {
    use super::is_king_move;
    use crate::game_state::chess_types::{Color, Square};

    fn king(source: &str, target: &str, color: Color) -> bool {
        let source: Square = source.parse().expect("source square");
        let target: Square = target.parse().expect("target square");
        is_king_move(source, target, color)
    }

    #[test]
    fn king_from_e4_steps_once() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        let mut targets: Vec<String> = Square::all()
            .filter(|&t| is_king_move(e4, t, Color::White))
            .map(|t| t.to_string())
            .collect();
        targets.sort();

        assert_eq!(targets, vec!["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"]);
    }

    #[test]
    fn castling_shape_only_from_own_home_square() {
        assert!(king("e1", "g1", Color::White));
        assert!(king("e1", "c1", Color::White));
        assert!(king("e8", "g8", Color::Black));
        assert!(king("e8", "c8", Color::Black));

        assert!(!king("e1", "g1", Color::Black));
        assert!(!king("e8", "c8", Color::White));
        assert!(!king("e1", "b1", Color::White));
        assert!(!king("d1", "f1", Color::White));
    }
}
