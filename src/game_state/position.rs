//! Authoritative board state.
//!
//! `Position` stores one `PieceSet` per player, the side to move and the board
//! geometry. It is mutated in place by `make_move` / `unmake_move` (see
//! `move_generation::move_apply`), which keep their undo records on
//! `undo_stack`.

use log::warn;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION;
use crate::game_state::chess_types::*;
use crate::utils::board_generator::generate_board_description;
use crate::utils::board_parser::parse_board_description;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub turn: Player,
    pub geometry: BoardGeometry,
    /// Ordered by player id.
    pub piece_sets: Vec<PieceSet>,
    pub undo_stack: Vec<UndoState>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new(BoardGeometry::standard(), 2)
    }
}

impl Position {
    /// Empty board with `player_count` empty piece sets, player 0 to move.
    pub fn new(geometry: BoardGeometry, player_count: usize) -> Self {
        Self {
            turn: Player::FIRST,
            geometry,
            piece_sets: (0..player_count)
                .map(|id| PieceSet::new(Player(id as u8)))
                .collect(),
            undo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_board_description(STARTING_POSITION).expect("starting position description should always parse")
    }

    #[inline]
    pub fn from_description(description: &str) -> ChessResult<Self> {
        parse_board_description(description)
    }

    #[inline]
    pub fn description(&self) -> String {
        generate_board_description(self)
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.geometry.width()
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.geometry.height()
    }

    pub fn piece_set(&self, player: Player) -> ChessResult<&PieceSet> {
        self.piece_sets
            .get(player.index())
            .ok_or(ChessErrors::UnknownPlayer(player.0))
    }

    pub fn piece_set_mut(&mut self, player: Player) -> ChessResult<&mut PieceSet> {
        self.piece_sets
            .get_mut(player.index())
            .ok_or(ChessErrors::UnknownPlayer(player.0))
    }

    /// Everything `player` owns.
    #[inline]
    pub fn occupancy(&self, player: Player) -> Bitboard {
        self.piece_sets
            .get(player.index())
            .map_or(Bitboard::EMPTY, PieceSet::occupancy)
    }

    /// Everything owned by players other than `player`.
    pub fn enemy_occupancy(&self, player: Player) -> Bitboard {
        self.piece_sets
            .iter()
            .filter(|set| set.player != player)
            .fold(Bitboard::EMPTY, |acc, set| acc | set.occupancy())
    }

    pub fn occupancy_all(&self) -> Bitboard {
        self.piece_sets
            .iter()
            .fold(Bitboard::EMPTY, |acc, set| acc | set.occupancy())
    }

    pub fn piece_at(&self, square: Square) -> Option<(Player, PieceSlot)> {
        self.piece_sets
            .iter()
            .find_map(|set| set.slot_at(square).map(|slot| (set.player, slot)))
    }

    pub fn piece_record(&self, player: Player, slot: PieceSlot) -> Option<&Piece> {
        self.piece_sets.get(player.index())?.slot(slot)
    }

    /// Put a piece on `(row, col)`. Refuses occupied and off-board squares.
    pub fn place_piece(
        &mut self,
        player: Player,
        slot: PieceSlot,
        row: usize,
        col: usize,
    ) -> ChessResult<()> {
        let square = self.geometry.to_index(row, col)?;
        if self.occupancy_all().contains(square) {
            return Err(ChessErrors::OverlappingPieces {
                square: square as usize,
            });
        }
        let piece = self
            .piece_set_mut(player)?
            .slot_mut(slot)
            .ok_or(ChessErrors::UnknownPlayer(player.0))?;
        piece.occupancy.set_bit(square as usize)
    }

    /// Put the piece written as `symbol` on `(row, col)`: upper case belongs
    /// to player 0, lower case to player 1, unknown letters become custom
    /// pieces.
    pub fn place_symbol(&mut self, symbol: char, row: usize, col: usize) -> ChessResult<()> {
        let player = if symbol.is_ascii_uppercase() {
            Player::FIRST
        } else {
            Player::SECOND
        };
        let slot = match PieceKind::from_symbol(symbol) {
            PieceKind::Custom => self.piece_set_mut(player)?.custom_slot(symbol),
            kind => PieceSlot::Standard(kind),
        };
        self.place_piece(player, slot, row, col)
    }

    /// Remove whatever stands on `(row, col)`, returning its owner and slot.
    pub fn clear_square(&mut self, row: usize, col: usize) -> ChessResult<Option<(Player, PieceSlot)>> {
        let square = self.geometry.to_index(row, col)?;
        let Some((player, slot)) = self.piece_at(square) else {
            return Ok(None);
        };
        if let Some(piece) = self.piece_sets[player.index()].slot_mut(slot) {
            piece.occupancy.clear_bit(square as usize)?;
        }
        Ok(Some((player, slot)))
    }

    /// Attach movement rules to every custom piece written as `symbol`.
    pub fn set_custom_movement(&mut self, symbol: char, movement: Movement) {
        let symbol = symbol.to_ascii_lowercase();
        let mut found = false;
        for set in &mut self.piece_sets {
            for piece in set.custom.iter_mut().filter(|p| p.symbol == symbol) {
                piece.movement = Some(movement.clone());
                found = true;
            }
        }
        if !found {
            warn!("no custom piece '{symbol}' in position; movement ignored");
        }
    }

    /// Check that no square is claimed twice and nothing sits off the board.
    pub fn check_disjoint(&self) -> ChessResult<()> {
        let mut seen = Bitboard::EMPTY;
        for piece in self.piece_sets.iter().flat_map(PieceSet::pieces) {
            let overlap = seen & piece.occupancy;
            if let Some(square) = overlap.lowest_square() {
                return Err(ChessErrors::OverlappingPieces {
                    square: square as usize,
                });
            }
            let off_board = piece.occupancy & !self.geometry.playable();
            if let Some(square) = off_board.lowest_square() {
                let (row, col) = self.geometry.coord(square);
                return Err(ChessErrors::SquareOffBoard {
                    row: row as usize,
                    col: col as usize,
                    width: self.width(),
                    height: self.height(),
                });
            }
            seen |= piece.occupancy;
        }
        Ok(())
    }
}
