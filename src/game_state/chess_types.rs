//! Core value types shared by the board state, the move encoder and the
//! move generator.

pub use crate::game_state::bitboard::Bitboard;
pub use crate::game_state::board_geometry::BoardGeometry;
pub use crate::game_state::piece_set::{PieceSet, PieceSlot};
pub use crate::game_state::position::Position;
pub use crate::game_state::undo_state::UndoState;

/// Linear square index (`row * ROW_STRIDE + col`).
pub type Square = u8;

/// Player identifier. Player 0 moves first and owns the upper-case symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(pub u8);

impl Player {
    pub const FIRST: Player = Player(0);
    pub const SECOND: Player = Player(1);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Player after `self` in a game of `player_count` players.
    #[inline]
    pub const fn next(self, player_count: usize) -> Player {
        Player(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Row delta of a forward pawn step. Even players move toward row 0.
    #[inline]
    pub const fn forward_rows(self) -> i8 {
        if self.0 % 2 == 0 {
            -1
        } else {
            1
        }
    }
}

/// Piece kind. Ownership and the display symbol live on `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    Custom,
}

pub const STANDARD_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
];

/// Promotion targets in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    /// Slot in `PieceSet`'s standard table. `Custom` has no fixed slot.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self {
            PieceKind::King => Some(0),
            PieceKind::Queen => Some(1),
            PieceKind::Rook => Some(2),
            PieceKind::Bishop => Some(3),
            PieceKind::Knight => Some(4),
            PieceKind::Pawn => Some(5),
            PieceKind::Custom => None,
        }
    }

    /// Lower-case symbol of a standard kind.
    #[inline]
    pub const fn symbol(self) -> Option<char> {
        match self {
            PieceKind::King => Some('k'),
            PieceKind::Queen => Some('q'),
            PieceKind::Rook => Some('r'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Knight => Some('n'),
            PieceKind::Pawn => Some('p'),
            PieceKind::Custom => None,
        }
    }

    pub fn from_symbol(symbol: char) -> PieceKind {
        match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => PieceKind::Custom,
        }
    }
}

/// Movement rules for a custom piece, as `(row, col)` deltas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Movement {
    /// Single-step leaps; blockers in between are ignored.
    pub jumps: Vec<(i8, i8)>,
    /// Ray directions walked until the board edge or a blocker.
    pub slides: Vec<(i8, i8)>,
}

/// All pieces of one kind and owner, aggregated into a single bitboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
    /// Lower-case display symbol.
    pub symbol: char,
    pub occupancy: Bitboard,
    /// Only meaningful for `PieceKind::Custom`.
    pub movement: Option<Movement>,
}

impl Piece {
    pub fn standard(kind: PieceKind, owner: Player) -> Self {
        Self {
            kind,
            owner,
            symbol: kind.symbol().unwrap_or('?'),
            occupancy: Bitboard::EMPTY,
            movement: None,
        }
    }

    pub fn custom(symbol: char, owner: Player) -> Self {
        Self {
            kind: PieceKind::Custom,
            owner,
            symbol: symbol.to_ascii_lowercase(),
            occupancy: Bitboard::EMPTY,
            movement: None,
        }
    }

    /// Symbol as written in a board description: upper-case for player 0.
    pub fn display_symbol(&self) -> char {
        if self.owner == Player::FIRST {
            self.symbol.to_ascii_uppercase()
        } else {
            self.symbol
        }
    }
}
