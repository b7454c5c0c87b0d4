//! Position-to-board-description generator.
//!
//! Emits the layout and side tokens read by `board_parser`, so any position
//! the parser accepts can be written back out.

use crate::game_state::chess_types::*;

pub fn generate_board_description(position: &Position) -> String {
    let side = if position.turn.0 % 2 == 0 { "w" } else { "b" };
    format!("{} {side}", generate_layout(position))
}

fn generate_layout(position: &Position) -> String {
    let geometry = position.geometry;
    let mut rows = Vec::with_capacity(geometry.height() as usize);

    for row in 0..geometry.height() as usize {
        let mut out = String::new();
        let mut empty_count = 0usize;

        for col in 0..geometry.width() as usize {
            let symbol = geometry
                .to_index(row, col)
                .ok()
                .and_then(|square| symbol_on_square(position, square));
            match symbol {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        rows.push(out);
    }

    rows.join("/")
}

fn symbol_on_square(position: &Position, square: Square) -> Option<char> {
    let (player, slot) = position.piece_at(square)?;
    position
        .piece_record(player, slot)
        .map(Piece::display_symbol)
}
