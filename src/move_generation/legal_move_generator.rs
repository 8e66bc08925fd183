//! Legal move generation by copy-and-try.
//!
//! Candidates come from the precomputed geometry table filtered by the
//! position checks. Each candidate is then played on a copy of the position
//! and rejected if any opposing reply could capture the mover's king.
//! Castling is additionally rejected out of check and across an attacked
//! square.

use tracing::trace;

use crate::game_state::chess_rules::{
    castling_rook_target, castling_side_for, FIFTY_MOVE_RULE_HALFMOVES, TRIAL_PROMOTION,
};
use crate::game_state::chess_types::{Color, GameStatus, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::validate_move_with_state;
use crate::moves::chess_move::Move;
use crate::moves::move_table::MoveTable;
use crate::players::player_trait::FixedPromotion;

#[derive(Debug, Clone, Copy)]
pub struct LegalMoveGenerator<'t> {
    table: &'t MoveTable,
}

impl Default for LegalMoveGenerator<'static> {
    fn default() -> Self {
        Self::new(MoveTable::shared())
    }
}

impl<'t> LegalMoveGenerator<'t> {
    pub fn new(table: &'t MoveTable) -> Self {
        Self { table }
    }

    /// Moves that obey geometry and position checks, ignoring king safety.
    /// Sorted in text order.
    pub fn pseudo_legal_moves(&self, position: &Position) -> Vec<Move> {
        let active = position.active_color;
        let mut moves = Vec::with_capacity(64);

        for (source, piece) in position.board.pieces() {
            if !piece.is_color(active) {
                continue;
            }
            for &target in self.table.targets(piece, source) {
                let mv = Move::new(source, target);
                if validate_move_with_state(position, mv) {
                    moves.push(mv);
                }
            }
        }

        moves.sort_unstable();
        moves
    }

    /// Every legal move for the side to move, sorted in text order.
    pub fn legal_moves(&self, position: &Position) -> Vec<Move> {
        let moves: Vec<Move> = self
            .pseudo_legal_moves(position)
            .into_iter()
            .filter(|&mv| self.is_legal_candidate(position, mv))
            .collect();

        trace!(count = moves.len(), side = %position.active_color, "generated legal moves");
        moves
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self, position: &Position) -> bool {
        let mut flipped = *position;
        flipped.active_color = position.active_color.opposite();
        self.can_capture_king(&flipped, position.active_color)
    }

    pub fn check_game_over(&self, position: &Position) -> GameStatus {
        let legal_moves = self.legal_moves(position);
        self.game_status(position, &legal_moves)
    }

    /// Status given the already generated legal moves of `position`.
    pub fn game_status(&self, position: &Position, legal_moves: &[Move]) -> GameStatus {
        if legal_moves.is_empty() {
            return if self.is_check(position) {
                GameStatus::win_for(position.active_color.opposite())
            } else {
                GameStatus::Stalemate
            };
        }

        if position.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES {
            return GameStatus::Draw;
        }

        GameStatus::Ongoing
    }

    fn is_legal_candidate(&self, position: &Position, mv: Move) -> bool {
        let mover = position.active_color;

        if position.piece(mv.source).is(PieceKind::King, mover) {
            if let Some(side) = castling_side_for(mover, mv.source, mv.target) {
                if self.is_check(position) {
                    return false;
                }
                let transit = Move::new(mv.source, castling_rook_target(mover, side));
                if self.leaves_king_capturable(position, transit) {
                    return false;
                }
            }
        }

        !self.leaves_king_capturable(position, mv)
    }

    fn leaves_king_capturable(&self, position: &Position, mv: Move) -> bool {
        let mover = position.active_color;
        let mut trial = *position;
        trial.apply_move(mv, &mut FixedPromotion(TRIAL_PROMOTION));
        self.can_capture_king(&trial, mover)
    }

    // True when the side to move in `position` has a pseudo-legal move onto
    // the king of `king_color`. No king, no capture.
    fn can_capture_king(&self, position: &Position, king_color: Color) -> bool {
        let Some(king_square) = position.board.king_square(king_color) else {
            return false;
        };
        self.pseudo_legal_moves(position)
            .iter()
            .any(|mv| mv.target == king_square)
    }
}
