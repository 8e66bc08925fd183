use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::errors::{ChessError, ChessResult};

/// Install the global `fmt` subscriber. `RUST_LOG`, when set, wins over `level`.
pub fn init_logging(level: Level) -> ChessResult<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .map_err(|err| ChessError::Logging(format!("bad RUST_LOG directives: {err}")))?,
        _ => EnvFilter::new(level.as_str().to_ascii_lowercase()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ChessError::Logging(err.to_string()))
}
