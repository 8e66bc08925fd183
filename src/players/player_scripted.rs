//! Replays a fixed list of moves, one per turn.

use std::collections::VecDeque;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PromotionPiece, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::players::player_trait::{Player, PromotionChooser};

#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
    promotion: PromotionPiece,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            promotion: PromotionPiece::Queen,
        }
    }

    /// Parse each entry as a four-character move.
    pub fn from_texts(texts: &[&str]) -> ChessResult<Self> {
        let moves = texts
            .iter()
            .map(|text| text.parse::<Move>())
            .collect::<ChessResult<Vec<_>>>()?;
        Ok(Self::new(moves))
    }

    pub fn with_promotion(mut self, promotion: PromotionPiece) -> Self {
        self.promotion = promotion;
        self
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl PromotionChooser for ScriptedPlayer {
    fn choose_promotion(&mut self, _square: Square) -> PromotionPiece {
        self.promotion
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> String {
        "scripted".to_owned()
    }

    /// The next scripted move, whether or not it is legal. The runner checks.
    fn choose_move(&mut self, _game_state: &GameState, _legal_moves: &[Move]) -> ChessResult<Move> {
        self.moves.pop_front().ok_or(ChessError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::ScriptedPlayer;
    use crate::errors::ChessError;
    use crate::game_state::game_state::GameState;
    use crate::players::player_trait::Player;

    #[test]
    fn replays_in_order_then_runs_dry() {
        let game = GameState::new_game();
        let mut player = ScriptedPlayer::from_texts(&["e2e4", "g1f3"]).expect("moves");

        assert_eq!(player.choose_move(&game, &[]).expect("move").to_string(), "e2e4");
        assert_eq!(player.remaining(), 1);
        assert_eq!(player.choose_move(&game, &[]).expect("move").to_string(), "g1f3");
        assert!(matches!(
            player.choose_move(&game, &[]),
            Err(ChessError::InputClosed)
        ));
    }

    #[test]
    fn rejects_bad_move_text() {
        assert!(matches!(
            ScriptedPlayer::from_texts(&["e2e4", "castle"]),
            Err(ChessError::InvalidMoveText(_))
        ));
    }
}
