//! Terminal move source.
//!
//! Prompts on a writer and reads four-character moves from a reader until a
//! legal one is entered. Generic over the streams so it can be driven from
//! stdin/stdout or from an in-memory buffer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PromotionPiece, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::players::player_trait::{Player, PromotionChooser};

pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt_line(&mut self, prompt: &str) -> ChessResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ChessError::InputClosed);
        }
        Ok(line.trim().to_ascii_lowercase())
    }
}

impl<R: BufRead, W: Write> PromotionChooser for HumanPlayer<R, W> {
    fn choose_promotion(&mut self, square: Square) -> PromotionPiece {
        loop {
            let prompt = format!("promote on {square} to (q, r, b, n): ");
            let answer = match self.prompt_line(&prompt) {
                Ok(answer) => answer,
                Err(err) => {
                    warn!(%err, "promotion prompt failed, promoting to queen");
                    return PromotionPiece::Queen;
                }
            };

            match answer.as_str() {
                "q" => return PromotionPiece::Queen,
                "r" => return PromotionPiece::Rook,
                "b" => return PromotionPiece::Bishop,
                "n" => return PromotionPiece::Knight,
                other => {
                    warn!(input = other, "unrecognised promotion piece");
                    if let Err(err) = writeln!(self.output, "'{other}' is not one of q, r, b, n") {
                        warn!(%err, "promotion prompt failed, promoting to queen");
                        return PromotionPiece::Queen;
                    }
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn choose_move(&mut self, game_state: &GameState, legal_moves: &[Move]) -> ChessResult<Move> {
        let prompt = format!("{} ({}) >>> ", self.name, game_state.active_color_name());
        loop {
            let text = self.prompt_line(&prompt)?;
            match text.parse::<Move>() {
                Ok(mv) if legal_moves.contains(&mv) => return Ok(mv),
                Ok(mv) => {
                    warn!(%mv, "rejected illegal move");
                    writeln!(self.output, "{mv} is not a legal move")?;
                }
                Err(err) => {
                    warn!(%err, "rejected move text");
                    writeln!(self.output, "{err}; enter moves like e2e4")?;
                }
            }
        }
    }
}
