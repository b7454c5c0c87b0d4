//! Board-description-to-Position parser.
//!
//! Accepts a FEN-like text `layout side [ignored fields...]` for boards up to
//! 16x16. The first row in the layout is row 0. Run-lengths may have more than
//! one digit, and letters outside `kqrbnp` become custom pieces.

use log::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board_geometry::{MAX_ROWS, ROW_STRIDE};
use crate::game_state::chess_types::*;

/// Players a parsed description always provides.
const DESCRIPTION_PLAYERS: usize = 2;

enum Cell {
    Empty(usize),
    Piece(char),
}

pub fn parse_board_description(description: &str) -> ChessResult<Position> {
    let mut parts = description.split_whitespace();
    let layout = parts.next().ok_or_else(|| malformed("missing board layout"))?;
    let side = parts.next().ok_or_else(|| malformed("missing side-to-move"))?;
    // Castling, en passant and clock fields are accepted but not modelled.

    let rows = layout
        .split('/')
        .map(parse_row)
        .collect::<ChessResult<Vec<Vec<Cell>>>>()?;

    let height = rows.len();
    if height > MAX_ROWS {
        return Err(malformed(format!("{height} rows exceed the maximum of {MAX_ROWS}")));
    }
    let width = row_width(&rows[0]);
    if width == 0 || width > ROW_STRIDE {
        return Err(malformed(format!("row width {width} is outside 1..={ROW_STRIDE}")));
    }
    if let Some(idx) = rows.iter().position(|row| row_width(row) != width) {
        return Err(malformed(format!(
            "row {idx} has {} columns, expected {width}",
            row_width(&rows[idx])
        )));
    }

    let geometry = BoardGeometry::new(width, height)?;
    let mut position = Position::new(geometry, DESCRIPTION_PLAYERS);
    position.turn = parse_side(side)?;

    for (row, cells) in rows.iter().enumerate() {
        let mut col = 0usize;
        for cell in cells {
            match *cell {
                Cell::Empty(run) => col += run,
                Cell::Piece(symbol) => {
                    position.place_symbol(symbol, row, col)?;
                    col += 1;
                }
            }
        }
    }

    debug!(
        "parsed {width}x{height} board, player {} to move, {} pieces",
        position.turn.0,
        position.occupancy_all().count()
    );
    Ok(position)
}

fn parse_row(text: &str) -> ChessResult<Vec<Cell>> {
    let mut cells = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(digit) = ch.to_digit(10) {
            if digit == 0 {
                return Err(malformed(format!("zero run-length in '{text}'")));
            }
            let mut run = digit as usize;
            while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                run = run * 10 + next as usize;
                chars.next();
                if run > ROW_STRIDE {
                    return Err(malformed(format!("run-length in '{text}' is too long")));
                }
            }
            cells.push(Cell::Empty(run));
        } else if ch.is_ascii_alphabetic() {
            cells.push(Cell::Piece(ch));
        } else {
            return Err(malformed(format!("invalid character '{ch}' in '{text}'")));
        }
    }

    Ok(cells)
}

fn row_width(cells: &[Cell]) -> usize {
    cells
        .iter()
        .map(|cell| match cell {
            Cell::Empty(run) => *run,
            Cell::Piece(_) => 1,
        })
        .sum()
}

fn parse_side(side: &str) -> ChessResult<Player> {
    match side {
        "w" => Ok(Player::FIRST),
        "b" => Ok(Player::SECOND),
        _ => Err(malformed(format!("invalid side-to-move '{side}'"))),
    }
}

fn malformed(message: impl Into<String>) -> ChessErrors {
    ChessErrors::MalformedBoardDescription(message.into())
}
