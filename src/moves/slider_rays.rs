//! Ray walking for sliding pieces.
//!
//! A ray advances one square at a time through `BoardGeometry::offset`, so it
//! ends at the board edge instead of wrapping into the padding columns or the
//! next row. The first occupied square is included and ends the ray; the
//! caller removes friendly squares afterwards.

use crate::game_state::chess_types::{Bitboard, BoardGeometry, Square};

pub fn trace_ray(
    geometry: &BoardGeometry,
    square: Square,
    d_row: i8,
    d_col: i8,
    occupancy: Bitboard,
) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let mut current = square;

    while let Some(next) = geometry.offset(current, d_row, d_col) {
        attacks.insert(next);
        if occupancy.contains(next) {
            break;
        }
        current = next;
    }

    attacks
}

#[inline]
pub fn slide_attacks(
    geometry: &BoardGeometry,
    square: Square,
    directions: &[(i8, i8)],
    occupancy: Bitboard,
) -> Bitboard {
    directions
        .iter()
        .fold(Bitboard::EMPTY, |acc, &(d_row, d_col)| {
            acc | trace_ray(geometry, square, d_row, d_col, occupancy)
        })
}
