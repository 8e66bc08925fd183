//! Uniform random move source.
//!
//! Seeded explicitly or from the wall clock. The seed is reported so a game
//! can be replayed: two players with the same seed facing the same moves make
//! the same choices. An optional thinking time delays every move.

use std::thread;
use std::time::Duration;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PromotionPiece, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::players::player_trait::{Player, PromotionChooser};

pub struct RandomPlayer {
    rng: StdRng,
    seed: u64,
    thinking_time: Duration,
}

impl RandomPlayer {
    /// Seed from the current time.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        debug!(seed, "random player seeded");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            thinking_time: Duration::ZERO,
        }
    }

    /// Pause for `delay` before answering each move request.
    pub fn with_thinking_time(mut self, delay: Duration) -> Self {
        self.thinking_time = delay;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn thinking_time(&self) -> Duration {
        self.thinking_time
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromotionChooser for RandomPlayer {
    fn choose_promotion(&mut self, _square: Square) -> PromotionPiece {
        PromotionPiece::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PromotionPiece::Queen)
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> String {
        format!("random bot (seed {})", self.seed)
    }

    fn choose_move(&mut self, _game_state: &GameState, legal_moves: &[Move]) -> ChessResult<Move> {
        if !self.thinking_time.is_zero() {
            thread::sleep(self.thinking_time);
        }
        legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessError::NoLegalMoves)
    }
}
