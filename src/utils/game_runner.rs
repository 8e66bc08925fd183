//! Turn loop that drives a game between two players.
//!
//! Each turn checks for a terminal status, hands the legal list to the active
//! player, verifies the answer is one of the offered moves and applies it
//! with the same player choosing any promotion.

use tracing::{info, warn};

use crate::errors::{format_move_list, ChessError, ChessResult};
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::players::player_trait::Player;

pub struct GameRunner {
    game_state: GameState,
    // indexed by Color::index
    players: [Box<dyn Player>; 2],
}

impl GameRunner {
    pub fn new(game_state: GameState, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            game_state,
            players: [white, black],
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn into_game_state(self) -> GameState {
        self.game_state
    }

    pub fn player(&self, color: Color) -> &dyn Player {
        &*self.players[color.index()]
    }

    /// Play one ply. Returns the status before the ply when the game is
    /// already over, `Ongoing` otherwise.
    pub fn play_turn(&mut self) -> ChessResult<GameStatus> {
        let generator = LegalMoveGenerator::default();
        let position = *self.game_state.position();
        let legal_moves = generator.legal_moves(&position);

        let status = generator.game_status(&position, &legal_moves);
        if status.is_terminal() {
            info!(%status, fen = %self.game_state.fen(), "game over");
            return Ok(status);
        }

        let color = position.active_color;
        let player = &mut self.players[color.index()];
        let mv = player.choose_move(&self.game_state, &legal_moves)?;

        if !legal_moves.contains(&mv) {
            return Err(ChessError::MoveNotInLegalList {
                mv,
                fen: self.game_state.fen(),
                history: format_move_list(self.game_state.moves()),
            });
        }

        self.game_state.make_move(mv, &mut **player);
        info!(
            ply = self.game_state.moves().len(),
            side = %color,
            player = %player.name(),
            %mv,
            "played move"
        );

        Ok(GameStatus::Ongoing)
    }

    /// Play until the game ends or `max_plies` more plies have been played.
    /// Returns `Ongoing` if the limit was reached first.
    pub fn play_to_completion(&mut self, max_plies: usize) -> ChessResult<GameStatus> {
        self.play_to_completion_with(max_plies, |_| {})
    }

    /// Like `play_to_completion`, calling `before_turn` with the current game
    /// ahead of every turn.
    pub fn play_to_completion_with<F>(
        &mut self,
        max_plies: usize,
        mut before_turn: F,
    ) -> ChessResult<GameStatus>
    where
        F: FnMut(&GameState),
    {
        for _ in 0..max_plies {
            before_turn(&self.game_state);
            let status = self.play_turn()?;
            if status.is_terminal() {
                return Ok(status);
            }
        }

        let status = self.game_state.check_game_over();
        if !status.is_terminal() {
            warn!(max_plies, fen = %self.game_state.fen(), "ply limit reached");
        }
        Ok(status)
    }
}
