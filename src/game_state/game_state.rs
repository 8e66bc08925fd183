//! Game-level state: the live position plus its history.
//!
//! `GameState` owns the current `Position`, every move played so far and the
//! FEN of every position reached (the initial one included). Undo restores
//! the previous FEN. Legality queries delegate to `LegalMoveGenerator` and
//! never mutate the game.

use std::fmt;

use tracing::{debug, trace};

use crate::errors::{invariant_violation, ChessError, ChessResult, InvariantViolation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, GameStatus, Piece, Square};
use crate::game_state::move_context::MoveContext;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::moves::chess_move::Move;
use crate::players::player_trait::PromotionChooser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    position: Position,
    moves: Vec<Move>,
    fens: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_position(Position::starting())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            fens: vec![position.to_fen()],
            moves: Vec::new(),
            position,
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    #[inline]
    pub fn piece(&self, square: Square) -> Piece {
        self.position.piece(square)
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.position.active_color
    }

    /// `"white"` or `"black"`.
    pub fn active_color_name(&self) -> &'static str {
        self.position.active_color.name()
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.position.castling_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.position.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.position.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.position.fullmove_number
    }

    /// Moves played since the initial position, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// FEN of every position reached, the initial one first. The last entry
    /// always equals `fen()`.
    pub fn position_history(&self) -> &[String] {
        &self.fens
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Play `mv`, which must come from `generate_possible_moves`.
    pub fn make_move<C>(&mut self, mv: Move, chooser: &mut C) -> MoveContext
    where
        C: PromotionChooser + ?Sized,
    {
        let context = self.position.apply_move(mv, chooser);
        let fen = self.position.to_fen();
        debug!(%mv, fen = %fen, "applied move");

        self.moves.push(mv);
        self.fens.push(fen);
        context
    }

    /// Restore the position before the last move.
    pub fn undo(&mut self) {
        if self.fens.len() < 2 {
            invariant_violation(
                InvariantViolation::new("undo with no move to take back").with_fen(self.fen()),
            );
        }

        let live = self.fen();
        if self.fens.last() != Some(&live) {
            invariant_violation(
                InvariantViolation::new("recorded position differs from the live position")
                    .with_fen(live)
                    .with_moves(&self.moves),
            );
        }

        self.fens.pop();
        self.moves.pop();

        let previous = self.fens.last().map(String::as_str).unwrap_or_default();
        self.position = match Position::from_fen(previous) {
            Ok(position) => position,
            Err(err) => invariant_violation(
                InvariantViolation::new(format!("recorded position failed to reload: {err}"))
                    .with_moves(&self.moves),
            ),
        };
        trace!(fen = previous, "undid move");
    }

    /// Parse and play each move text in order, checking legality first.
    pub fn play_moves<C>(&mut self, moves: &[&str], chooser: &mut C) -> ChessResult<()>
    where
        C: PromotionChooser + ?Sized,
    {
        for text in moves {
            let mv: Move = text.parse()?;
            if !self.generate_possible_moves().contains(&mv) {
                return Err(ChessError::IllegalMove { mv, fen: self.fen() });
            }
            self.make_move(mv, chooser);
        }
        Ok(())
    }

    /// Every legal move for the side to move, in text order.
    pub fn generate_possible_moves(&self) -> Vec<Move> {
        LegalMoveGenerator::default().legal_moves(&self.position)
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        LegalMoveGenerator::default().is_check(&self.position)
    }

    pub fn check_game_over(&self) -> GameStatus {
        LegalMoveGenerator::default().check_game_over(&self.position)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}
