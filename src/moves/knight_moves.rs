use crate::game_state::chess_types::{Bitboard, BoardGeometry, Square};
use crate::moves::attack_tables::leaper_attacks;

/// `(row, col)` deltas of the eight L-shaped leaps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_attacks(geometry: &BoardGeometry, square: Square) -> Bitboard {
    leaper_attacks(geometry, square, &KNIGHT_OFFSETS)
}
