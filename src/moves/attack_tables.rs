//! Per-geometry lookup tables for leaping pieces.
//!
//! Knight and king targets only depend on the square and the board shape, so
//! they are computed once per `BoardGeometry` and indexed by square. Squares in
//! the padding columns keep an empty entry.

use crate::game_state::bitboard::{Bitboard, BITBOARD_CAPACITY};
use crate::game_state::chess_types::{BoardGeometry, Square};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackTables {
    geometry: BoardGeometry,
    knight: Vec<Bitboard>,
    king: Vec<Bitboard>,
}

impl AttackTables {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            knight: leaper_table(&geometry, knight_attacks),
            king: leaper_table(&geometry, king_attacks),
        }
    }

    #[inline]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    #[inline]
    pub fn knight(&self, square: Square) -> Bitboard {
        self.knight[square as usize]
    }

    #[inline]
    pub fn king(&self, square: Square) -> Bitboard {
        self.king[square as usize]
    }
}

/// Targets of a single leap by each of `offsets` from `square`.
pub fn leaper_attacks(geometry: &BoardGeometry, square: Square, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| geometry.offset(square, d_row, d_col))
        .collect()
}

fn leaper_table(
    geometry: &BoardGeometry,
    attacks: fn(&BoardGeometry, Square) -> Bitboard,
) -> Vec<Bitboard> {
    (0..BITBOARD_CAPACITY)
        .map(|sq| {
            let square = sq as Square;
            if geometry.is_on_board(square) {
                attacks(geometry, square)
            } else {
                Bitboard::EMPTY
            }
        })
        .collect()
}
