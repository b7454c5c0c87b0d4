//! King attack generation.
//!
//! Single steps in the eight directions, validated against the board edges.

use crate::game_state::chess_types::{Bitboard, BoardGeometry, Square};
use crate::moves::attack_tables::leaper_attacks;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_attacks(geometry: &BoardGeometry, square: Square) -> Bitboard {
    leaper_attacks(geometry, square, &KING_OFFSETS)
}
