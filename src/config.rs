//! Command-line configuration for the self-play binary.

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Random,
    Human,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "plum_rules", version, about = "Play a chess game between two move sources")]
pub struct Config {
    /// Log verbosity; RUST_LOG overrides it when set
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Position to start from
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    pub fen: String,

    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    pub white: PlayerKind,

    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    pub black: PlayerKind,

    /// Seed for random players; taken from the clock when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay before each random move, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub think_ms: u64,

    /// Stop after this many plies even if the game is not over
    #[arg(long, default_value_t = 1000)]
    pub max_plies: usize,

    /// Print the board before every ply
    #[arg(long)]
    pub render: bool,
}
