//! Precomputed geometric targets per (piece, source square).
//!
//! Built once from the per-piece shape predicates so move generation never
//! re-derives geometry. The table is immutable after construction and shared
//! by reference.

use std::sync::LazyLock;

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::king_moves::is_king_move;
use crate::moves::knight_moves::is_knight_move;
use crate::moves::pawn_moves::is_pawn_move;
use crate::moves::queen_moves::is_queen_move;
use crate::moves::rook_moves::is_rook_move;

static SHARED_MOVE_TABLE: LazyLock<MoveTable> = LazyLock::new(MoveTable::new);

#[derive(Debug, Clone)]
pub struct MoveTable {
    // [color][kind][source] -> targets, a1 first
    targets: Vec<Vec<Square>>,
}

impl MoveTable {
    pub fn new() -> Self {
        let mut targets = Vec::with_capacity(2 * 6 * 64);

        for color in Color::ALL {
            for kind in PieceKind::ALL {
                for source in Square::all() {
                    targets.push(
                        Square::all()
                            .filter(|&target| is_geometric_move(kind, color, source, target))
                            .collect(),
                    );
                }
            }
        }

        Self { targets }
    }

    /// Process-wide table, built on first use.
    pub fn shared() -> &'static MoveTable {
        &SHARED_MOVE_TABLE
    }

    /// Targets reachable by `piece` from `source` on an empty board.
    /// Empty for an empty square.
    pub fn targets(&self, piece: Piece, source: Square) -> &[Square] {
        match (piece.kind(), piece.color()) {
            (Some(kind), Some(color)) => &self.targets[slot(kind, color, source)],
            _ => &[],
        }
    }
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn slot(kind: PieceKind, color: Color, source: Square) -> usize {
    (color.index() * 6 + kind.index()) * 64 + source.index()
}

/// Whether `kind` of `color` could go from `source` to `target` on an empty board.
pub fn is_geometric_move(kind: PieceKind, color: Color, source: Square, target: Square) -> bool {
    match kind {
        PieceKind::Pawn => is_pawn_move(source, target, color),
        PieceKind::Knight => is_knight_move(source, target),
        PieceKind::Bishop => is_bishop_move(source, target),
        PieceKind::Rook => is_rook_move(source, target),
        PieceKind::Queen => is_queen_move(source, target),
        PieceKind::King => is_king_move(source, target, color),
    }
}
