//! A single chess position: everything a FEN string records.
//!
//! `Position` is `Copy`. Legality checks copy it, apply a candidate and throw
//! the copy away, so the live position is never touched during generation.

use std::fmt;

use crate::errors::{invariant_violation, ChessResult, InvariantViolation};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    castling_rook_target, rook_home_square, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::{
    CastlingRights, CastlingSide, Color, Piece, PieceKind, Square,
};
use crate::game_state::move_context::MoveContext;
use crate::moves::chess_move::Move;
use crate::players::player_trait::PromotionChooser;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub active_color: Color,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            active_color: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Position {
    pub fn starting() -> Self {
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(position) => position,
            Err(err) => invariant_violation(InvariantViolation::new(format!(
                "starting position failed to parse: {err}"
            ))),
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece(&self, square: Square) -> Piece {
        self.board.square(square)
    }

    /// Play `mv`, which must already be pseudo-legal for the side to move.
    ///
    /// `chooser` is consulted only when the move promotes.
    pub fn apply_move<C>(&mut self, mv: Move, chooser: &mut C) -> MoveContext
    where
        C: PromotionChooser + ?Sized,
    {
        let context = MoveContext::new(self, mv);
        let color = self.active_color;

        let mut next_board = self.board;
        next_board.make_move(mv);

        if let Some(captured) = context.en_passant_capture {
            next_board.clear(captured);
        }

        if let Some(side) = context.castling {
            let rook_source = rook_home_square(color, side);
            let rook = Piece::new(PieceKind::Rook, color);
            if self.board.square(rook_source) != rook {
                let what = format!("castling {mv} without a rook on {rook_source}");
                invariant_violation(InvariantViolation::new(what).with_fen(self.to_fen()));
            }
            next_board.make_move(Move::new(rook_source, castling_rook_target(color, side)));
        }

        if context.is_promotion {
            let choice = chooser.choose_promotion(mv.target);
            next_board.set(mv.target, Piece::new(choice.kind(), color));
        }

        self.en_passant_target = context.next_en_passant_target;
        update_castling_rights(&mut self.castling_rights, &next_board, context.moved_piece);
        self.board = next_board;

        if color == Color::Black {
            self.fullmove_number += 1;
        }
        if context.moved_piece.kind() == Some(PieceKind::Pawn) || context.captures_material() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        self.active_color = color.opposite();

        context
    }
}

// A right survives only while its rook is home and the king has not moved.
fn update_castling_rights(rights: &mut CastlingRights, board: &Board, moved: Piece) {
    for color in Color::ALL {
        for side in CastlingSide::ALL {
            if board.square(rook_home_square(color, side)) != Piece::new(PieceKind::Rook, color) {
                rights.revoke(color, side);
            }
        }
    }

    if let (Some(PieceKind::King), Some(color)) = (moved.kind(), moved.color()) {
        rights.revoke_all(color);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingSide, Color, PromotionPiece};
    use crate::players::player_trait::FixedPromotion;

    fn play(fen: &str, mv: &str) -> Position {
        let mut position = Position::from_fen(fen).expect("FEN should parse");
        position.apply_move(
            mv.parse().expect("move should parse"),
            &mut FixedPromotion(PromotionPiece::Queen),
        );
        position
    }

    #[test]
    fn starting_position_matches_constant() {
        assert_eq!(Position::starting().to_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn en_passant_capture_clears_captured_pawn() {
        let after = play("8/8/8/3Pp3/8/8/8/8 w - e6 0 1", "d5e6");
        assert_eq!(after.to_fen(), "8/8/4P3/8/8/8/8/8 b - - 0 1");
    }

    #[test]
    fn plain_pawn_push_keeps_neighbor() {
        let after = play("8/8/8/3Pp3/8/8/8/8 w - e6 0 1", "d5d6");
        assert_eq!(after.to_fen(), "8/8/3P4/4p3/8/8/8/8 b - - 0 1");
    }

    #[test]
    fn double_push_sets_target_and_clocks() {
        let after = play(STARTING_POSITION_FEN, "e2e4");
        assert_eq!(
            after.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );

        let after_black = play(&after.to_fen(), "g8f6");
        assert_eq!(
            after_black.to_fen(),
            "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2"
        );
    }

    #[test]
    fn kingside_castle_moves_rook_and_clears_own_rights() {
        let after = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1");
        assert_eq!(after.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
    }

    #[test]
    fn queenside_castle_for_black() {
        let after = play("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8c8");
        assert_eq!(after.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2");
    }

    #[test]
    fn castling_rights_track_rooks_and_kings() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

        let after = play(fen, "a1a2");
        assert!(!after.castling_rights.has(Color::White, CastlingSide::Queenside));
        assert!(after.castling_rights.has(Color::White, CastlingSide::Kingside));

        let after = play(fen, "h1h8");
        assert!(!after.castling_rights.has(Color::White, CastlingSide::Kingside));
        assert!(!after.castling_rights.has(Color::Black, CastlingSide::Kingside));
        assert!(after.castling_rights.has(Color::Black, CastlingSide::Queenside));

        let after = play(fen, "e1e2");
        assert!(!after.castling_rights.has(Color::White, CastlingSide::Kingside));
        assert!(!after.castling_rights.has(Color::White, CastlingSide::Queenside));
        assert!(after.castling_rights.has(Color::Black, CastlingSide::Kingside));
    }

    #[test]
    fn promotion_uses_chosen_piece() {
        let mut position = Position::from_fen("8/4P3/8/8/8/8/8/8 w - - 5 1").expect("FEN");
        position.apply_move(
            "e7e8".parse().expect("move"),
            &mut FixedPromotion(PromotionPiece::Knight),
        );
        assert_eq!(position.to_fen(), "4N3/8/8/8/8/8/8/8 b - - 0 1");
    }

    #[test]
    #[should_panic(expected = "without a rook")]
    fn castling_without_rook_is_an_invariant_violation() {
        play("4k3/8/8/8/8/8/8/4K3 w K - 0 1", "e1g1");
    }
}
