//! Side effects of a move, derived from the position it is played in.

use crate::errors::{invariant_violation, InvariantViolation};
use crate::game_state::chess_rules::{castling_side_for, promotion_rank};
use crate::game_state::chess_types::{CastlingSide, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveContext {
    pub moved_piece: Piece,
    /// The target square held an opposing piece.
    pub is_capture: bool,
    /// Square of the pawn removed by an en-passant capture.
    pub en_passant_capture: Option<Square>,
    /// Square skipped by a pawn double push.
    pub next_en_passant_target: Option<Square>,
    pub is_promotion: bool,
    pub castling: Option<CastlingSide>,
}

impl MoveContext {
    /// Classify `mv` in `position`. The move is assumed pseudo-legal.
    pub fn new(position: &Position, mv: Move) -> Self {
        let moved_piece = position.piece(mv.source);
        let (Some(kind), Some(color)) = (moved_piece.kind(), moved_piece.color()) else {
            invariant_violation(
                InvariantViolation::new(format!("no piece on source square of {mv}"))
                    .with_fen(position.to_fen()),
            )
        };

        let is_capture = position.piece(mv.target).is_color(color.opposite());
        let is_pawn = kind == PieceKind::Pawn;

        let en_passant_capture = if is_pawn
            && mv.file_delta() != 0
            && position.en_passant_target == Some(mv.target)
        {
            let captured = mv.target.offset(0, -color.sign());
            match captured {
                Some(square) if position.piece(square).is(PieceKind::Pawn, color.opposite()) => {
                    Some(square)
                }
                _ => invariant_violation(
                    InvariantViolation::new(format!(
                        "en-passant capture {mv} has no opposing pawn behind the target"
                    ))
                    .with_fen(position.to_fen()),
                ),
            }
        } else {
            None
        };

        let next_en_passant_target = if is_pawn && mv.rank_delta().abs() == 2 {
            mv.source.offset(0, color.sign())
        } else {
            None
        };

        if en_passant_capture.is_some() && next_en_passant_target.is_some() {
            invariant_violation(
                InvariantViolation::new(format!(
                    "{mv} is both an en-passant capture and a double push"
                ))
                .with_fen(position.to_fen()),
            );
        }

        let is_promotion = is_pawn && mv.target.rank() == promotion_rank(color);
        let castling = if kind == PieceKind::King {
            castling_side_for(color, mv.source, mv.target)
        } else {
            None
        };

        Self {
            moved_piece,
            is_capture,
            en_passant_capture,
            next_en_passant_target,
            is_promotion,
            castling,
        }
    }

    /// A capture of either kind, which resets the halfmove clock.
    pub fn captures_material(&self) -> bool {
        self.is_capture || self.en_passant_capture.is_some()
    }
}
