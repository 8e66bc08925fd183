//! Crate root module declarations for the Plum rules engine.
//!
//! Exposes the position model, move geometry, legal move generation, move
//! sources and utility helpers so the binaries, benches and tests can import
//! stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_context;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_table;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod players {
    pub mod player_human;
    pub mod player_random;
    pub mod player_scripted;
    pub mod player_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_runner;
    pub mod logging;
    pub mod render_game_state;
}
