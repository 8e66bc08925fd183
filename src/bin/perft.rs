//! Perft runner.
//!
//! Usage:
//! `cargo run --release --bin perft -- --depth 4`
//! `cargo run --release --bin perft -- --fen "<fen>" --depth 3 --divide`

use std::time::Instant;

use clap::Parser;

use plum_rules::errors::ChessResult;
use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::game_state::position::Position;
use plum_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_rules::move_generation::perft::{perft, perft_divide};

#[derive(Parser, Debug)]
#[command(about = "Count legal move tree leaves from a position")]
struct Args {
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Print per-move node counts for the first ply
    #[arg(long)]
    divide: bool,
}

fn main() -> ChessResult<()> {
    let args = Args::parse();
    let position = Position::from_fen(&args.fen)?;
    let generator = LegalMoveGenerator::default();

    if args.divide {
        for (mv, nodes) in perft_divide(&generator, &position, args.depth) {
            println!("{mv}: {nodes}");
        }
    }

    let start = Instant::now();
    let counts = perft(&generator, &position, args.depth);
    let elapsed_ms = start.elapsed().as_millis();

    println!(
        "depth={} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={} elapsed_ms={}",
        args.depth,
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        elapsed_ms
    );
    Ok(())
}
