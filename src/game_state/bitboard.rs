//! Fixed-width 256-bit bitboard.
//!
//! Every piece occupancy in the engine is a `Bitboard`. Bit `i` corresponds to
//! the linear square index produced by `BoardGeometry::to_index`, so a board
//! of up to 16 x 16 squares fits in four machine words.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not, Shl, Shr};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Number of addressable bits.
pub const BITBOARD_CAPACITY: usize = 256;

const WORDS: usize = BITBOARD_CAPACITY / 64;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitboard([u64; WORDS]);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard([0; WORDS]);
    pub const FULL: Bitboard = Bitboard([u64::MAX; WORDS]);

    #[inline]
    pub const fn words(self) -> [u64; WORDS] {
        self.0
    }

    /// Single-bit board for `square`.
    #[inline]
    pub const fn from_square(square: Square) -> Self {
        let mut words = [0u64; WORDS];
        let sq = square as usize;
        words[sq / 64] = 1u64 << (sq % 64);
        Bitboard(words)
    }

    /// Set bit `index`, failing when the index is outside the capacity.
    pub fn set_bit(&mut self, index: usize) -> ChessResult<()> {
        let square = checked_square(index)?;
        self.insert(square);
        Ok(())
    }

    /// Clear bit `index`, failing when the index is outside the capacity.
    pub fn clear_bit(&mut self, index: usize) -> ChessResult<()> {
        let square = checked_square(index)?;
        self.remove(square);
        Ok(())
    }

    /// Test bit `index`, failing when the index is outside the capacity.
    pub fn is_set(&self, index: usize) -> ChessResult<bool> {
        let square = checked_square(index)?;
        Ok(self.contains(square))
    }

    /// Copy of `self` with `index` set.
    pub fn with_bit(self, index: usize) -> ChessResult<Self> {
        let mut out = self;
        out.set_bit(index)?;
        Ok(out)
    }

    /// Copy of `self` with `index` cleared.
    pub fn without_bit(self, index: usize) -> ChessResult<Self> {
        let mut out = self;
        out.clear_bit(index)?;
        Ok(out)
    }

    // A `Square` is a `u8`, so the infallible forms below can never address
    // a bit past the capacity.

    #[inline]
    pub fn insert(&mut self, square: Square) {
        let sq = square as usize;
        self.0[sq / 64] |= 1u64 << (sq % 64);
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        let sq = square as usize;
        self.0[sq / 64] &= !(1u64 << (sq % 64));
    }

    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        let sq = square as usize;
        (self.0[sq / 64] >> (sq % 64)) & 1 == 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn lowest_square(&self) -> Option<Square> {
        for (word_idx, &word) in self.0.iter().enumerate() {
            if word != 0 {
                return Some((word_idx * 64 + word.trailing_zeros() as usize) as Square);
            }
        }
        None
    }

    /// Remove and return the lowest set square.
    #[inline]
    pub fn pop_lowest(&mut self) -> Option<Square> {
        let square = self.lowest_square()?;
        self.remove(square);
        Some(square)
    }

    /// Set squares in ascending order.
    pub fn squares(self) -> Squares {
        Squares(self)
    }

    fn shift_left(self, bits: u32) -> Self {
        if bits as usize >= BITBOARD_CAPACITY {
            return Bitboard::EMPTY;
        }
        let word_shift = (bits / 64) as usize;
        let bit_shift = bits % 64;
        let mut out = [0u64; WORDS];
        for dst in word_shift..WORDS {
            let src = dst - word_shift;
            out[dst] |= self.0[src] << bit_shift;
            if bit_shift > 0 && src > 0 {
                out[dst] |= self.0[src - 1] >> (64 - bit_shift);
            }
        }
        Bitboard(out)
    }

    fn shift_right(self, bits: u32) -> Self {
        if bits as usize >= BITBOARD_CAPACITY {
            return Bitboard::EMPTY;
        }
        let word_shift = (bits / 64) as usize;
        let bit_shift = bits % 64;
        let mut out = [0u64; WORDS];
        for dst in 0..WORDS - word_shift {
            let src = dst + word_shift;
            out[dst] |= self.0[src] >> bit_shift;
            if bit_shift > 0 && src + 1 < WORDS {
                out[dst] |= self.0[src + 1] << (64 - bit_shift);
            }
        }
        Bitboard(out)
    }
}

#[inline]
fn checked_square(index: usize) -> ChessResult<Square> {
    if index >= BITBOARD_CAPACITY {
        return Err(ChessErrors::IndexOutOfRange {
            index,
            capacity: BITBOARD_CAPACITY,
        });
    }
    Ok(index as Square)
}

/// Iterator over the set squares of a bitboard, lowest first.
#[derive(Debug, Clone)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lowest()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut out = Bitboard::EMPTY;
        for square in iter {
            out.insert(square);
        }
        out
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard([
            self.0[0] & rhs.0[0],
            self.0[1] & rhs.0[1],
            self.0[2] & rhs.0[2],
            self.0[3] & rhs.0[3],
        ])
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard([
            self.0[0] | rhs.0[0],
            self.0[1] | rhs.0[1],
            self.0[2] | rhs.0[2],
            self.0[3] | rhs.0[3],
        ])
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard([
            self.0[0] ^ rhs.0[0],
            self.0[1] ^ rhs.0[1],
            self.0[2] ^ rhs.0[2],
            self.0[3] ^ rhs.0[3],
        ])
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Bitboard([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// Shift toward higher indices (down the board).
impl Shl<u32> for Bitboard {
    type Output = Self;
    #[inline]
    fn shl(self, bits: u32) -> Self {
        self.shift_left(bits)
    }
}

/// Shift toward lower indices (up the board).
impl Shr<u32> for Bitboard {
    type Output = Self;
    #[inline]
    fn shr(self, bits: u32) -> Self {
        self.shift_right(bits)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bitboard({:016x}_{:016x}_{:016x}_{:016x})",
            self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}
