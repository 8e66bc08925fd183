//! Perft: count leaf positions of the legal move tree.
//!
//! Used to validate generation against published node counts. Promotions are
//! a single move here (the chooser is asked once when it is played), so
//! counts match published tables only for trees without promotions.

use crate::game_state::chess_rules::TRIAL_PROMOTION;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::players::player_trait::FixedPromotion;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(generator: &LegalMoveGenerator<'_>, position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();

    for mv in generator.legal_moves(position) {
        let mut child = *position;
        let context = child.apply_move(mv, &mut FixedPromotion(TRIAL_PROMOTION));

        if depth > 1 {
            total.merge(perft(generator, &child, depth - 1));
            continue;
        }

        total.nodes += 1;
        if context.captures_material() {
            total.captures += 1;
        }
        if context.en_passant_capture.is_some() {
            total.en_passant += 1;
        }
        if context.castling.is_some() {
            total.castles += 1;
        }
        if context.is_promotion {
            total.promotions += 1;
        }
        if generator.is_check(&child) {
            total.checks += 1;
            if generator.legal_moves(&child).is_empty() {
                total.checkmates += 1;
            }
        }
    }

    total
}

/// Per-root-move node counts, sorted by move text.
pub fn perft_divide(
    generator: &LegalMoveGenerator<'_>,
    position: &Position,
    depth: u8,
) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .legal_moves(position)
        .into_iter()
        .map(|mv| {
            let mut child = *position;
            child.apply_move(mv, &mut FixedPromotion(TRIAL_PROMOTION));
            (mv.to_string(), perft(generator, &child, depth - 1).nodes)
        })
        .collect()
}
