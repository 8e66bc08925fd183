//! Move-source abstraction used by the game runner.
//!
//! A player picks one move from the legal list it is handed and, separately,
//! the piece a pawn promotes to. Bots, a terminal prompt and scripted
//! replays all sit behind the same pair of traits.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{PromotionPiece, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Asked for the promotion piece when a pawn reaches its last rank.
///
/// The answer cannot fail. An implementation that cannot get one, for
/// example because its input or output stream broke, promotes to a queen.
pub trait PromotionChooser {
    fn choose_promotion(&mut self, square: Square) -> PromotionPiece;
}

pub trait Player: PromotionChooser {
    fn name(&self) -> String;

    /// Pick one of `legal_moves`. Returning anything else is a contract
    /// violation that the runner reports.
    fn choose_move(&mut self, game_state: &GameState, legal_moves: &[Move]) -> ChessResult<Move>;
}

/// Always promotes to the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPromotion(pub PromotionPiece);

impl Default for FixedPromotion {
    fn default() -> Self {
        Self(PromotionPiece::Queen)
    }
}

impl PromotionChooser for FixedPromotion {
    fn choose_promotion(&mut self, _square: Square) -> PromotionPiece {
        self.0
    }
}
