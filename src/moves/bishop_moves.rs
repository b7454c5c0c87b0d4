use crate::game_state::chess_types::{Bitboard, BoardGeometry, Square};
use crate::moves::slider_rays::slide_attacks;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_attacks(geometry: &BoardGeometry, square: Square, occupancy: Bitboard) -> Bitboard {
    slide_attacks(geometry, square, &BISHOP_DIRECTIONS, occupancy)
}
