//! Coordinate names for squares and moves.
//!
//! Files are lettered `a..p` by column. Ranks count up from the bottom row, so
//! on an eight-row board row 0 is rank 8 and `e2` is row 6, column 4. Move
//! text concatenates the two squares and appends the promotion letter
//! (`e2e4`, `a7a8q`).

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Convert a square index to its name (for example: "e4", "p16").
pub fn square_name(geometry: &BoardGeometry, square: Square) -> ChessResult<String> {
    let (row, col) = geometry.to_coord(square as usize)?;
    let file = char::from(b'a' + col as u8);
    let rank = geometry.height() as usize - row;
    Ok(format!("{file}{rank}"))
}

/// Convert a square name to its index on `geometry`.
pub fn parse_square_name(geometry: &BoardGeometry, name: &str) -> ChessResult<Square> {
    let mut chars = name.chars();
    let file = chars
        .next()
        .filter(char::is_ascii_lowercase)
        .ok_or_else(|| bad_name(name))?;
    let rank: usize = chars.as_str().parse().map_err(|_| bad_name(name))?;
    if rank == 0 || rank > geometry.height() as usize {
        return Err(bad_name(name));
    }

    let col = (file as u8 - b'a') as usize;
    let row = geometry.height() as usize - rank;
    geometry.to_index(row, col)
}

/// Coordinate text for `mv`, such as "e2e4" or "a7a8q".
pub fn move_text(geometry: &BoardGeometry, mv: Move) -> ChessResult<String> {
    let mut out = square_name(geometry, mv.source())?;
    out.push_str(&square_name(geometry, mv.destination())?);
    if let Some(symbol) = mv.promotion().and_then(PieceKind::symbol) {
        out.push(symbol);
    }
    Ok(out)
}

fn bad_name(name: &str) -> ChessErrors {
    ChessErrors::MalformedBoardDescription(format!("invalid square name '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::{move_text, parse_square_name, square_name};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::{Move, MoveType};

    #[test]
    fn names_follow_ranks_from_the_bottom() {
        let geometry = BoardGeometry::standard();
        assert_eq!(square_name(&geometry, 0).expect("on board"), "a8");
        assert_eq!(square_name(&geometry, 7 * 16 + 7).expect("on board"), "h1");
        assert_eq!(parse_square_name(&geometry, "e2").expect("valid name"), 6 * 16 + 4);
    }

    #[test]
    fn wide_boards_use_two_digit_ranks() {
        let geometry = BoardGeometry::new(16, 16).expect("16x16 is supported");
        assert_eq!(square_name(&geometry, 15).expect("on board"), "p16");
        assert_eq!(parse_square_name(&geometry, "p16").expect("valid name"), 15);
        assert_eq!(parse_square_name(&geometry, "a1").expect("valid name"), 240);
    }

    #[test]
    fn off_board_names_are_rejected() {
        let geometry = BoardGeometry::standard();
        assert!(matches!(
            parse_square_name(&geometry, "i1"),
            Err(ChessErrors::SquareOffBoard { .. })
        ));
        assert!(parse_square_name(&geometry, "a9").is_err());
        assert!(parse_square_name(&geometry, "a0").is_err());
        assert!(parse_square_name(&geometry, "E2").is_err());
        assert!(parse_square_name(&geometry, "").is_err());
        assert!(square_name(&geometry, 8).is_err());
    }

    #[test]
    fn move_text_appends_the_promotion_letter() {
        let geometry = BoardGeometry::standard();
        let push = Move::encode(6 * 16 + 4, 4 * 16 + 4, MoveType::Quiet, None).expect("valid encoding");
        assert_eq!(move_text(&geometry, push).expect("on board"), "e2e4");

        let promote = Move::encode(16, 0, MoveType::Promotion, Some(PieceKind::Queen)).expect("valid encoding");
        assert_eq!(move_text(&geometry, promote).expect("on board"), "a7a8q");
    }
}
