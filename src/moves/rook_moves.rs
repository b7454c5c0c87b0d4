use crate::game_state::chess_types::{Bitboard, BoardGeometry, Square};
use crate::moves::slider_rays::slide_attacks;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

#[inline]
pub fn rook_attacks(geometry: &BoardGeometry, square: Square, occupancy: Bitboard) -> Bitboard {
    slide_attacks(geometry, square, &ROOK_DIRECTIONS, occupancy)
}
