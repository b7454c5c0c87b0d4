//! Plain-text board renderers for debugging and diagnostics.
//!
//! Row 0 is printed first, matching the board description layout.

use crate::game_state::chess_types::*;

/// Render one bitboard as a grid of `0`/`1` markers sized to `geometry`.
/// Padding columns are never shown.
pub fn render_bitboard(geometry: &BoardGeometry, bitboard: Bitboard) -> String {
    render_grid(geometry, |square| {
        if bitboard.contains(square) {
            '1'
        } else {
            '0'
        }
    })
}

/// Render every piece by its description symbol, `.` for empty squares.
pub fn render_position(position: &Position) -> String {
    render_grid(&position.geometry, |square| {
        position
            .piece_at(square)
            .and_then(|(player, slot)| position.piece_record(player, slot))
            .map_or('.', Piece::display_symbol)
    })
}

fn render_grid(geometry: &BoardGeometry, mut cell: impl FnMut(Square) -> char) -> String {
    let mut lines = Vec::with_capacity(geometry.height() as usize);
    for row in 0..geometry.height() as usize {
        let line: Vec<String> = (0..geometry.width() as usize)
            .filter_map(|col| geometry.to_index(row, col).ok())
            .map(|square| cell(square).to_string())
            .collect();
        lines.push(line.join(" "));
    }
    lines.join("\n")
}
