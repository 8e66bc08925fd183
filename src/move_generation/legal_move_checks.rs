//! Position-aware checks layered on top of move geometry.
//!
//! A move is pseudo-legal when its geometry fits the moving piece and the
//! position allows it: no capture of a friendly piece, no sliding through
//! pieces, pawn capture and push rules, castling preconditions. Whether the
//! mover's king is left capturable is decided by the generator.

use crate::game_state::chess_rules::{
    castling_intermediate_squares, castling_side_for, en_passant_capture_rank, rook_home_square,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::move_table::is_geometric_move;

/// Geometry plus position checks for the side to move.
pub fn is_pseudo_legal(position: &Position, mv: Move) -> bool {
    let piece = position.piece(mv.source);
    match (piece.kind(), piece.color()) {
        (Some(kind), Some(color)) => {
            is_geometric_move(kind, color, mv.source, mv.target)
                && validate_move_with_state(position, mv)
        }
        _ => false,
    }
}

/// Position checks only. Geometry must already hold.
pub fn validate_move_with_state(position: &Position, mv: Move) -> bool {
    let active = position.active_color;
    let piece = position.piece(mv.source);

    if !piece.is_color(active) || position.piece(mv.target).is_color(active) {
        return false;
    }

    match piece.kind() {
        Some(PieceKind::Pawn) => validate_pawn_move_with_state(position, mv, active),
        Some(PieceKind::Knight) => true,
        Some(PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            validate_sliding_move_with_state(position, mv)
        }
        Some(PieceKind::King) => validate_king_move_with_state(position, mv, active),
        None => false,
    }
}

fn validate_pawn_move_with_state(position: &Position, mv: Move, color: Color) -> bool {
    let target_piece = position.piece(mv.target);

    if mv.file_delta() != 0 {
        if target_piece.is_color(color.opposite()) {
            return true;
        }
        return target_piece.is_empty()
            && position.en_passant_target == Some(mv.target)
            && mv.target.rank() == en_passant_capture_rank(color);
    }

    if !target_piece.is_empty() {
        return false;
    }

    if mv.rank_delta().abs() == 2 {
        return match mv.source.offset(0, color.sign()) {
            Some(skipped) => position.piece(skipped).is_empty(),
            None => false,
        };
    }

    true
}

/// Every square strictly between source and target must be empty.
fn validate_sliding_move_with_state(position: &Position, mv: Move) -> bool {
    let (df, dr) = (mv.file_delta(), mv.rank_delta());
    let aligned = (df == 0) != (dr == 0) || (df != 0 && df.abs() == dr.abs());
    if !aligned {
        return false;
    }

    let (step_file, step_rank) = (df.signum(), dr.signum());
    let mut current = mv.source.offset(step_file, step_rank);
    while let Some(square) = current {
        if square == mv.target {
            return true;
        }
        if !position.piece(square).is_empty() {
            return false;
        }
        current = square.offset(step_file, step_rank);
    }

    false
}

fn validate_king_move_with_state(position: &Position, mv: Move, color: Color) -> bool {
    let Some(side) = castling_side_for(color, mv.source, mv.target) else {
        return true;
    };

    position.castling_rights.has(color, side)
        && position.piece(rook_home_square(color, side)) == Piece::new(PieceKind::Rook, color)
        && castling_intermediate_squares(color, side)
            .iter()
            .all(|&square| position.piece(square).is_empty())
}

#[cfg(test)]
mod tests {
    use super::is_pseudo_legal;
    use crate::game_state::position::Position;

    fn check(fen: &str, mv: &str) -> bool {
        let position = Position::from_fen(fen).expect("FEN should parse");
        is_pseudo_legal(&position, mv.parse().expect("move should parse"))
    }

    #[test]
    fn pawn_rules() {
        let fen = "8/8/8/8/8/3p4/4P3/8 w - - 0 1";
        assert!(check(fen, "e2e3"));
        assert!(check(fen, "e2e4"));
        assert!(check(fen, "e2d3"));
        assert!(!check(fen, "e2f3"));

        let blocked = "8/8/8/8/8/4p3/4P3/8 w - - 0 1";
        assert!(!check(blocked, "e2e3"));
        assert!(!check(blocked, "e2e4"));

        let blocked_far = "8/8/8/8/4p3/8/4P3/8 w - - 0 1";
        assert!(check(blocked_far, "e2e3"));
        assert!(!check(blocked_far, "e2e4"));

        // pawns never capture straight ahead
        assert!(!check("8/8/8/8/8/8/4p3/4P3 w - - 0 1", "e1e2"));
    }

    #[test]
    fn en_passant_needs_matching_target_and_rank() {
        assert!(check("8/8/8/3Pp3/8/8/8/8 w - e6 0 1", "d5e6"));
        assert!(!check("8/8/8/3Pp3/8/8/8/8 w - - 0 1", "d5e6"));
        assert!(check("8/8/8/8/3Pp3/8/8/8 b - d3 0 1", "e4d3"));
        // a white pawn cannot use a target on black's capture rank
        assert!(!check("8/8/8/8/8/8/3P4/8 w - e3 0 1", "d2e3"));
    }

    #[test]
    fn sliders_stop_at_pieces() {
        let fen = "8/8/8/8/3p4/8/1B6/R2P4 w - - 0 1";
        assert!(check(fen, "a1c1"));
        assert!(!check(fen, "a1e1"));
        assert!(!check(fen, "a1d1"));
        assert!(check(fen, "b2d4"));
        assert!(!check(fen, "b2e5"));
        assert!(check(fen, "a1a8"));
    }

    #[test]
    fn knights_jump() {
        assert!(check("8/8/8/8/8/PPP5/PNP5/PPP5 w - - 0 1", "b2d3"));
        assert!(check("8/8/8/8/8/PPP5/PNP5/PPP5 w - - 0 1", "b2c4"));
    }

    #[test]
    fn no_capturing_own_pieces_or_moving_for_the_opponent() {
        let fen = "8/8/8/8/8/8/PP6/RN6 w - - 0 1";
        assert!(!check(fen, "a1a2"));
        assert!(check(fen, "b1a3"));
        assert!(!check("8/8/8/8/8/8/8/rn6 w - - 0 1", "b1c3"));
        assert!(!check("8/8/8/8/8/8/8/8 w - - 0 1", "b1c3"));
    }

    #[test]
    fn castling_preconditions() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert!(check(fen, "e1g1"));
        assert!(check(fen, "e1c1"));

        assert!(!check("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", "e1g1"));
        assert!(!check("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", "e1c1"));
        assert!(!check("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1", "e1g1"));
        assert!(!check("r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1", "e1g1"));
        // king off its home square
        assert!(!check("r3k2r/8/8/8/8/8/8/R2K3R w KQkq - 0 1", "d1f1"));
    }
}
