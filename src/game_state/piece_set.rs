//! Per-player piece collections.

use crate::game_state::chess_types::*;

/// Address of one `Piece` record inside a `PieceSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceSlot {
    Standard(PieceKind),
    /// Index into `PieceSet::custom`.
    Custom(usize),
}

/// One standard `Piece` per kind plus an open-ended list of custom pieces,
/// all owned by `player`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceSet {
    pub player: Player,
    /// Indexed by `PieceKind::index()`.
    pub standard: [Piece; 6],
    pub custom: Vec<Piece>,
}

impl PieceSet {
    /// A set where every standard piece has an empty occupancy.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            standard: STANDARD_PIECE_KINDS.map(|kind| Piece::standard(kind, player)),
            custom: Vec::new(),
        }
    }

    /// Piece record for a standard kind. `Custom` has no single record.
    pub fn piece(&self, kind: PieceKind) -> Option<&Piece> {
        kind.index().map(|idx| &self.standard[idx])
    }

    pub fn piece_mut(&mut self, kind: PieceKind) -> Option<&mut Piece> {
        kind.index().map(move |idx| &mut self.standard[idx])
    }

    pub fn slot(&self, slot: PieceSlot) -> Option<&Piece> {
        match slot {
            PieceSlot::Standard(kind) => self.piece(kind),
            PieceSlot::Custom(idx) => self.custom.get(idx),
        }
    }

    pub fn slot_mut(&mut self, slot: PieceSlot) -> Option<&mut Piece> {
        match slot {
            PieceSlot::Standard(kind) => self.piece_mut(kind),
            PieceSlot::Custom(idx) => self.custom.get_mut(idx),
        }
    }

    /// Occupancy of a standard kind (empty for `Custom`).
    #[inline]
    pub fn bitboard(&self, kind: PieceKind) -> Bitboard {
        self.piece(kind).map_or(Bitboard::EMPTY, |piece| piece.occupancy)
    }

    /// Slot of the custom piece with `symbol`, registering it if needed.
    pub fn custom_slot(&mut self, symbol: char) -> PieceSlot {
        let symbol = symbol.to_ascii_lowercase();
        if let Some(idx) = self.custom.iter().position(|p| p.symbol == symbol) {
            return PieceSlot::Custom(idx);
        }
        self.custom.push(Piece::custom(symbol, self.player));
        PieceSlot::Custom(self.custom.len() - 1)
    }

    /// Union of every piece this player owns.
    pub fn occupancy(&self) -> Bitboard {
        self.standard
            .iter()
            .chain(self.custom.iter())
            .fold(Bitboard::EMPTY, |acc, piece| acc | piece.occupancy)
    }

    /// Which of this player's pieces stands on `square`.
    pub fn slot_at(&self, square: Square) -> Option<PieceSlot> {
        for piece in &self.standard {
            if piece.occupancy.contains(square) {
                return Some(PieceSlot::Standard(piece.kind));
            }
        }
        self.custom
            .iter()
            .position(|piece| piece.occupancy.contains(square))
            .map(PieceSlot::Custom)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.standard.iter().chain(self.custom.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_set_is_empty_with_every_standard_kind() {
        let set = PieceSet::new(Player::SECOND);
        for kind in STANDARD_PIECE_KINDS {
            let piece = set.piece(kind).expect("standard kind present");
            assert_eq!(piece.kind, kind);
            assert_eq!(piece.owner, Player::SECOND);
            assert!(piece.occupancy.is_empty());
        }
        assert!(set.custom.is_empty());
        assert!(set.occupancy().is_empty());
    }

    #[test]
    fn custom_slots_are_reused_per_symbol() {
        let mut set = PieceSet::new(Player::FIRST);
        let first = set.custom_slot('A');
        let again = set.custom_slot('a');
        let other = set.custom_slot('c');
        assert_eq!(first, again);
        assert_eq!(first, PieceSlot::Custom(0));
        assert_eq!(other, PieceSlot::Custom(1));
    }

    #[test]
    fn slot_at_finds_standard_and_custom_pieces() {
        let mut set = PieceSet::new(Player::FIRST);
        set.piece_mut(PieceKind::Rook)
            .expect("rook present")
            .occupancy
            .insert(0);
        let slot = set.custom_slot('a');
        set.slot_mut(slot).expect("custom present").occupancy.insert(5);

        assert_eq!(set.slot_at(0), Some(PieceSlot::Standard(PieceKind::Rook)));
        assert_eq!(set.slot_at(5), Some(PieceSlot::Custom(0)));
        assert_eq!(set.slot_at(6), None);
        assert_eq!(set.occupancy().count(), 2);
    }
}
