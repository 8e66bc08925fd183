use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, CastlingSide, Color, Square};
use crate::game_state::position::Position;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(&position.board);
    let castling = generate_castling_field(&position.castling_rights);
    let en_passant = position
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        board,
        position.active_color.fen_char(),
        castling,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

/// Piece-placement field, ranks 8 down to 1 with empty runs as digits.
pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            let piece = board.square(Square::new(file, rank));
            if piece.is_empty() {
                empty_count += 1;
                continue;
            }

            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
                empty_count = 0;
            }
            out.push(piece.fen_char());
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: &CastlingRights) -> String {
    let mut out = String::new();

    for (color, side, ch) in [
        (Color::White, CastlingSide::Kingside, 'K'),
        (Color::White, CastlingSide::Queenside, 'Q'),
        (Color::Black, CastlingSide::Kingside, 'k'),
        (Color::Black, CastlingSide::Queenside, 'q'),
    ] {
        if rights.has(color, side) {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
