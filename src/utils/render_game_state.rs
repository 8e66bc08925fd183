//! Terminal-oriented Unicode board renderer.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

/// Render the board with rank 8 at the top, files labelled on both edges.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            out.push(piece_to_unicode(board.square(Square::new(file, rank))));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus the side to move and the move counter.
pub fn render_game_state(game_state: &GameState) -> String {
    format!(
        "{}\n{} to move, move {}",
        render_board(game_state.board()),
        game_state.active_color_name(),
        game_state.fullmove_number()
    )
}

fn piece_to_unicode(piece: Piece) -> char {
    let (Some(kind), Some(color)) = (piece.kind(), piece.color()) else {
        return '·';
    };

    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_game_state};
    use crate::game_state::board::Board;
    use crate::game_state::game_state::GameState;

    #[test]
    fn renders_rank_eight_first() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3").expect("placement should parse");
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 · · · · ♚ · · · 8");
        assert_eq!(lines[8], "1 · · · · ♔ · · · 1");
    }

    #[test]
    fn game_state_footer_names_side_to_move() {
        let rendered = render_game_state(&GameState::new_game());
        assert!(rendered.ends_with("white to move, move 1"));
        assert!(rendered.contains("2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 2"));
    }
}
