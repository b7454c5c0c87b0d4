use crate::game_state::chess_types::{Bitboard, BoardGeometry, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(geometry: &BoardGeometry, square: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(geometry, square, occupancy) | bishop_attacks(geometry, square, occupancy)
}
