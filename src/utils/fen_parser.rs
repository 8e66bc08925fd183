//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! placement, side to move, castling rights, en-passant target and clocks.
//! Any malformed field is reported as `ChessError::InvalidFen`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, CastlingSide, Color, Piece, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let invalid = |reason: String| ChessError::InvalidFen {
        fen: fen.to_owned(),
        reason,
    };

    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(invalid(format!(
            "expected 6 space-separated fields, found {}",
            fields.len()
        )));
    }

    let board = parse_board(fields[0]).map_err(invalid)?;
    let active_color = parse_side_to_move(fields[1]).map_err(invalid)?;
    let castling_rights = parse_castling_rights(fields[2]).map_err(invalid)?;
    let en_passant_target = parse_en_passant_square(fields[3]).map_err(invalid)?;
    let halfmove_clock = parse_counter(fields[4])
        .ok_or_else(|| invalid(format!("invalid halfmove clock: {}", fields[4])))?;
    let fullmove_number = parse_counter(fields[5])
        .filter(|&n| n >= 1)
        .ok_or_else(|| invalid(format!("invalid fullmove number: {}", fields[5])))?;

    Ok(Position {
        board,
        castling_rights,
        en_passant_target,
        active_color,
        halfmove_clock,
        fullmove_number,
    })
}

/// Parse the piece-placement field: ranks 8 down to 1, `/`-separated.
pub fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        ));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        let mut previous_was_digit = false;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                if previous_was_digit {
                    return Err(format!(
                        "rank {} splits an empty run across digits",
                        board_rank + 1
                    ));
                }
                previous_was_digit = true;
                file += empty_count as u8;
                if file > 8 {
                    return Err(format!("rank {} has more than 8 files", board_rank + 1));
                }
                continue;
            }

            previous_was_digit = false;
            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| format!("invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err(format!("rank {} has more than 8 files", board_rank + 1));
            }

            board.set(Square::new(file, board_rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            ));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    // each flag at most once, in KQkq order
    let mut order = CASTLING_FLAGS.iter();
    for ch in castling_part.chars() {
        let Some(&(_, color, side)) = order.by_ref().find(|(flag, _, _)| *flag == ch) else {
            return Err(format!(
                "invalid castling rights '{castling_part}': expected a subset of KQkq in order"
            ));
        };
        rights.grant(color, side);
    }

    Ok(rights)
}

const CASTLING_FLAGS: [(char, Color, CastlingSide); 4] = [
    ('K', Color::White, CastlingSide::Kingside),
    ('Q', Color::White, CastlingSide::Queenside),
    ('k', Color::Black, CastlingSide::Kingside),
    ('q', Color::Black, CastlingSide::Queenside),
];

// Plain decimal digits without a sign or leading zeros.
fn parse_counter(text: &str) -> Option<u32> {
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if canonical {
        text.parse().ok()
    } else {
        None
    }
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| format!("invalid en-passant square: {en_passant_part}"))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingSide, Color, Piece, PieceKind};

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(position.active_color, Color::White);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.en_passant_target, None);
        for color in Color::ALL {
            for side in CastlingSide::ALL {
                assert!(position.castling_rights.has(color, side));
            }
        }
        assert_eq!(
            position.piece("e1".parse().expect("square")),
            Piece::new(PieceKind::King, Color::White)
        );
        assert_eq!(
            position.piece("d8".parse().expect("square")),
            Piece::new(PieceKind::Queen, Color::Black)
        );
    }

    #[test]
    fn parse_en_passant_and_clocks() {
        let position =
            parse_fen("8/8/8/3Pp3/8/8/8/8 w - e6 3 17").expect("FEN should parse");
        assert_eq!(position.en_passant_target.map(|s| s.to_string()), Some("e6".to_owned()));
        assert_eq!(position.halfmove_clock, 3);
        assert_eq!(position.fullmove_number, 17);
    }

    #[test]
    fn accepted_fens_re_encode_identically() {
        for fen in [
            "8/8/8/8/8/8/8/8 w Kq - 0 1",
            "8/8/8/8/8/8/8/8 b Qk - 10 100",
            "8/8/8/8/8/8/8/8 w KQkq - 0 1",
            "8/8/8/8/8/8/8/8 w q - 0 1",
        ] {
            let position = parse_fen(fen).expect("canonical FEN should parse");
            assert_eq!(position.to_fen(), fen);
        }
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let bad = [
            "",
            "8/8/8/8/8/8/8/8 w - - 0",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
            "8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/7 w - - 0 1",
            "8/8/8/8/8/8/8/9 w - - 0 1",
            "8/8/8/8/8/8/8/44p w - - 0 1",
            "8/8/8/8/8/8/8/7x w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w KX - 0 1",
            "8/8/8/8/8/8/8/8 w - e9 0 1",
            "8/8/8/8/8/8/8/8 w - - a 1",
            "8/8/8/8/8/8/8/8 w - - 0 0",
            "8/8/8/8/8/8/8/8 w - - -1 1",
            "8/8/8/8/8/8/8/8 w - - +3 1",
            "8/8/8/8/8/8/8/8 w - - 03 1",
            "8/8/8/8/8/8/8/8 w - - 0 +1",
            "8/8/8/8/8/8/8/44 w - - 0 1",
            "8/8/8/8/8/8/8/4k12 w - - 0 1",
            "8/8/8/8/8/8/8/8 w qK - 0 1",
            "8/8/8/8/8/8/8/8 w KK - 0 1",
            "8/8/8/8/8/8/8/8 w Kk- - 0 1",
            "8/8/8/8/8/8/8/8 w  - 0 1",
        ];

        for fen in bad {
            match parse_fen(fen) {
                Err(ChessError::InvalidFen { .. }) => {}
                other => panic!("expected InvalidFen for '{fen}', got {other:?}"),
            }
        }
    }
}
