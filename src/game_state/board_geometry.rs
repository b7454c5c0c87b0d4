//! Mapping between `(row, col)` coordinates and linear bitboard indices.
//!
//! Rows are laid out with a fixed stride of 16 regardless of the board width,
//! so `index = 16 * row + col`. Boards narrower than 16 columns leave padding
//! bits at the end of every row; those bits are never part of the playable
//! mask and every step that can cross a row edge is checked against it.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::bitboard::{Bitboard, BITBOARD_CAPACITY};
use crate::game_state::chess_types::Square;

/// Index distance between vertically adjacent squares.
pub const ROW_STRIDE: usize = 16;

/// Tallest supported board with the stride above.
pub const MAX_ROWS: usize = BITBOARD_CAPACITY / ROW_STRIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardGeometry {
    width: u8,
    height: u8,
    playable: Bitboard,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardGeometry {
    /// Build a geometry, rejecting boards that do not fit the row stride.
    pub fn new(width: usize, height: usize) -> ChessResult<Self> {
        if !(1..=ROW_STRIDE).contains(&width) || !(1..=MAX_ROWS).contains(&height) {
            return Err(ChessErrors::InvalidGeometry { width, height });
        }

        let mut playable = Bitboard::EMPTY;
        for row in 0..height {
            for col in 0..width {
                playable.insert((row * ROW_STRIDE + col) as Square);
            }
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            playable,
        })
    }

    /// The 8 x 8 board.
    pub fn standard() -> Self {
        let mut playable = Bitboard::EMPTY;
        for row in 0..8 {
            for col in 0..8 {
                playable.insert((row * ROW_STRIDE + col) as Square);
            }
        }
        Self {
            width: 8,
            height: 8,
            playable,
        }
    }

    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub const fn num_squares(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every on-board square.
    #[inline]
    pub const fn playable(&self) -> Bitboard {
        self.playable
    }

    pub fn to_index(&self, row: usize, col: usize) -> ChessResult<Square> {
        if row >= self.height as usize || col >= self.width as usize {
            return Err(self.off_board(row, col));
        }
        Ok((row * ROW_STRIDE + col) as Square)
    }

    pub fn to_coord(&self, index: usize) -> ChessResult<(usize, usize)> {
        if index >= BITBOARD_CAPACITY {
            return Err(ChessErrors::IndexOutOfRange {
                index,
                capacity: BITBOARD_CAPACITY,
            });
        }
        let (row, col) = (index / ROW_STRIDE, index % ROW_STRIDE);
        if row >= self.height as usize || col >= self.width as usize {
            return Err(self.off_board(row, col));
        }
        Ok((row, col))
    }

    /// Raw `(row, col)` of a square without the on-board check.
    #[inline]
    pub const fn coord(&self, square: Square) -> (u8, u8) {
        (square / ROW_STRIDE as u8, square % ROW_STRIDE as u8)
    }

    #[inline]
    pub fn is_on_board(&self, square: Square) -> bool {
        self.playable.contains(square)
    }

    /// Square reached from `square` by `(d_row, d_col)`, if it stays on the
    /// board. Stepping into the padding columns counts as leaving the board.
    #[inline]
    pub fn offset(&self, square: Square, d_row: i8, d_col: i8) -> Option<Square> {
        let (row, col) = self.coord(square);
        let row = row as i32 + d_row as i32;
        let col = col as i32 + d_col as i32;
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return None;
        }
        Some((row as usize * ROW_STRIDE + col as usize) as Square)
    }

    pub fn row_mask(&self, row: u8) -> Bitboard {
        self.playable
            .squares()
            .filter(|&sq| self.coord(sq).0 == row)
            .collect()
    }

    pub fn column_mask(&self, col: u8) -> Bitboard {
        self.playable
            .squares()
            .filter(|&sq| self.coord(sq).1 == col)
            .collect()
    }

    fn off_board(&self, row: usize, col: usize) -> ChessErrors {
        ChessErrors::SquareOffBoard {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }
}
