use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use plum_rules::config::{Config, PlayerKind};
use plum_rules::errors::ChessResult;
use plum_rules::game_state::game_state::GameState;
use plum_rules::players::player_human::HumanPlayer;
use plum_rules::players::player_random::RandomPlayer;
use plum_rules::players::player_trait::Player;
use plum_rules::utils::game_runner::GameRunner;
use plum_rules::utils::logging::init_logging;
use plum_rules::utils::render_game_state::render_game_state;

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(err) = init_logging(config.log_level.into()) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> ChessResult<()> {
    let game_state = GameState::from_fen(&config.fen)?;
    let white = build_player(config, config.white, "white", config.seed);
    let black = build_player(
        config,
        config.black,
        "black",
        config.seed.map(|s| s.wrapping_add(1)),
    );
    info!(white = %white.name(), black = %black.name(), fen = %config.fen, "starting game");

    let mut runner = GameRunner::new(game_state, white, black);
    let status = runner.play_to_completion_with(config.max_plies, |game| {
        if config.render {
            println!("{}\n", render_game_state(game));
        }
    })?;

    if status.is_terminal() {
        println!("{status}");
    } else {
        println!("stopped after {} plies", config.max_plies);
    }
    println!("{}", runner.game_state().fen());
    Ok(())
}

fn build_player(
    config: &Config,
    kind: PlayerKind,
    name: &str,
    seed: Option<u64>,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(name)),
        PlayerKind::Random => {
            let player = seed.map_or_else(RandomPlayer::new, RandomPlayer::with_seed);
            Box::new(player.with_thinking_time(Duration::from_millis(config.think_ms)))
        }
    }
}
