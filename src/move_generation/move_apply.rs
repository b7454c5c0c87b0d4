//! In-place move application and reversal.
//!
//! `make_move` validates the move against the position before touching any
//! bitboard, then records an `UndoState` on `Position::undo_stack`.
//! `unmake_move` pops that record and restores every bitboard and the turn,
//! so make followed by unmake yields a position equal to the original.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::nearest_occupied;
use crate::moves::move_descriptions::{Move, MoveType};

impl Position {
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        let move_type = mv.move_type();
        if move_type == MoveType::None {
            return Err(ChessErrors::IllegalMoveApplication(
                "null move cannot be applied".to_owned(),
            ));
        }

        let from = mv.source();
        let to = mv.destination();
        self.geometry.to_coord(from as usize)?;
        self.geometry.to_coord(to as usize)?;

        let side = self.turn;
        let moved_piece = self
            .piece_set(side)?
            .slot_at(from)
            .ok_or_else(|| illegal(format!("player {} has no piece on square {from}", side.0)))?;

        let captured = match (move_type.is_capture(), self.piece_at(to)) {
            (true, Some((owner, slot))) if owner != side => Some((owner, slot)),
            (true, _) => return Err(illegal(format!("no enemy piece to capture on {to}"))),
            (false, None) => None,
            (false, Some(_)) => return Err(illegal(format!("destination {to} is occupied"))),
        };

        if move_type.is_promotion() && moved_piece != PieceSlot::Standard(PieceKind::Pawn) {
            return Err(illegal(format!("only pawns promote, not {moved_piece:?}")));
        }

        let castle_rook = if move_type.is_castle() {
            Some(self.castle_rook_squares(side, moved_piece, from, to, move_type)?)
        } else {
            None
        };

        // Everything is validated; mutate.
        if let Some((owner, slot)) = captured {
            slot_bitboard(self, owner, slot)?.remove(to);
        }

        let placed = mv
            .promotion()
            .map_or(moved_piece, PieceSlot::Standard);
        slot_bitboard(self, side, moved_piece)?.remove(from);
        slot_bitboard(self, side, placed)?.insert(to);

        if let Some((rook_from, rook_to)) = castle_rook {
            let rooks = slot_bitboard(self, side, PieceSlot::Standard(PieceKind::Rook))?;
            rooks.remove(rook_from);
            rooks.insert(rook_to);
        }

        self.undo_stack.push(UndoState {
            mv,
            moved_piece,
            captured,
            castle_rook,
            prev_turn: side,
        });
        self.turn = side.next(self.piece_sets.len());

        Ok(())
    }

    /// Reverse the most recent `make_move`, returning the move undone.
    pub fn unmake_move(&mut self) -> ChessResult<Move> {
        let undo = self.undo_stack.pop().ok_or(ChessErrors::EmptyUndoStack)?;
        let mv = undo.mv;
        let side = undo.prev_turn;
        let from = mv.source();
        let to = mv.destination();

        let placed = mv
            .promotion()
            .map_or(undo.moved_piece, PieceSlot::Standard);
        slot_bitboard(self, side, placed)?.remove(to);
        slot_bitboard(self, side, undo.moved_piece)?.insert(from);

        if let Some((rook_from, rook_to)) = undo.castle_rook {
            let rooks = slot_bitboard(self, side, PieceSlot::Standard(PieceKind::Rook))?;
            rooks.remove(rook_to);
            rooks.insert(rook_from);
        }

        if let Some((owner, slot)) = undo.captured {
            slot_bitboard(self, owner, slot)?.insert(to);
        }

        self.turn = side;
        Ok(mv)
    }

    /// Copy-make: the position after `mv`, leaving `self` untouched.
    pub fn apply_move(&self, mv: Move) -> ChessResult<Position> {
        let mut next = self.clone();
        next.make_move(mv)?;
        Ok(next)
    }

    fn castle_rook_squares(
        &self,
        side: Player,
        moved_piece: PieceSlot,
        from: Square,
        to: Square,
        move_type: MoveType,
    ) -> ChessResult<(Square, Square)> {
        if moved_piece != PieceSlot::Standard(PieceKind::King) {
            return Err(illegal(format!("only kings castle, not {moved_piece:?}")));
        }
        let d_col: i8 = if move_type == MoveType::CastleRight { 1 } else { -1 };
        if self.geometry.offset(from, 0, 2 * d_col) != Some(to) {
            return Err(illegal(format!("castle from {from} cannot land on {to}")));
        }

        let rooks = self.piece_set(side)?.bitboard(PieceKind::Rook);
        let rook_from = nearest_occupied(&self.geometry, from, 0, d_col, self.occupancy_all())
            .map(|(square, _)| square)
            .filter(|&square| rooks.contains(square) && square != to)
            .ok_or_else(|| illegal(format!("no rook to castle with from {from}")))?;
        let rook_to = self
            .geometry
            .offset(from, 0, d_col)
            .ok_or_else(|| illegal(format!("no room to castle from {from}")))?;

        Ok((rook_from, rook_to))
    }
}

fn slot_bitboard(position: &mut Position, player: Player, slot: PieceSlot) -> ChessResult<&mut Bitboard> {
    position
        .piece_set_mut(player)?
        .slot_mut(slot)
        .map(|piece| &mut piece.occupancy)
        .ok_or_else(|| illegal(format!("player {} has no {slot:?} record", player.0)))
}

fn illegal(message: String) -> ChessErrors {
    ChessErrors::IllegalMoveApplication(message)
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::move_generation::pseudo_legal_generator::PseudoLegalMoveGenerator;
    use crate::moves::move_descriptions::{Move, MoveType};

    fn assert_every_move_restores(description: &str) {
        let mut position = Position::from_description(description).expect("description should parse");
        let original = position.clone();
        let moves = PseudoLegalMoveGenerator::new(position.geometry).generate_moves(&position);
        assert!(!moves.is_empty());

        for mv in moves {
            position.make_move(mv).expect("generated move should apply");
            position.check_disjoint().expect("pieces stay disjoint");
            assert_ne!(position.turn, original.turn);
            assert_eq!(position.unmake_move().expect("undo should succeed"), mv);
            assert_eq!(position, original, "make/unmake of {mv:?} changed the position");
        }
    }

    #[test]
    fn make_unmake_restores_the_starting_position() {
        assert_every_move_restores("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    }

    #[test]
    fn make_unmake_restores_captures_promotions_and_castles() {
        assert_every_move_restores("r3k2r/pPppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPpP/R3K2R w - - 0 1");
        assert_every_move_restores("r3k2r/pPppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPpP/R3K2R b - - 0 1");
    }

    #[test]
    fn make_unmake_restores_on_a_wide_board() {
        assert_every_move_restores("r1a1k2c1r/pppppppppp/10/10/4P5/10/PPPP1PPPPP/R1A1K2C1R w");
    }

    #[test]
    fn capture_removes_the_enemy_piece() {
        let mut position = Position::from_description("R2p4/8/8/8/8/8/8/8 w").expect("description should parse");
        let mv = Move::encode(0, 3, MoveType::Capture, None).expect("valid encoding");
        position.make_move(mv).expect("capture should apply");

        assert_eq!(position.piece_sets[1].bitboard(PieceKind::Pawn), Bitboard::EMPTY);
        assert_eq!(position.piece_sets[0].bitboard(PieceKind::Rook), Bitboard::from_square(3));
        assert_eq!(position.turn, Player::SECOND);
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut position = Position::from_description("8/P7/8/8/8/8/8/8 w").expect("description should parse");
        let mv = Move::encode(16, 0, MoveType::Promotion, Some(PieceKind::Knight)).expect("valid encoding");
        position.make_move(mv).expect("promotion should apply");

        assert!(position.piece_sets[0].bitboard(PieceKind::Pawn).is_empty());
        assert_eq!(position.piece_sets[0].bitboard(PieceKind::Knight), Bitboard::from_square(0));
    }

    #[test]
    fn castle_moves_king_and_rook() {
        let mut position = Position::from_description("8/8/8/8/8/8/8/R3K2R w").expect("description should parse");
        let king = position.geometry.to_index(7, 4).expect("on board");
        let king_to = position.geometry.to_index(7, 6).expect("on board");
        let mv = Move::encode(king as usize, king_to as usize, MoveType::CastleRight, None).expect("valid encoding");
        position.make_move(mv).expect("castle should apply");

        let rooks = position.piece_sets[0].bitboard(PieceKind::Rook);
        assert!(rooks.contains(position.geometry.to_index(7, 5).expect("on board")));
        assert!(rooks.contains(position.geometry.to_index(7, 0).expect("on board")));
        assert!(!rooks.contains(position.geometry.to_index(7, 7).expect("on board")));
        assert_eq!(position.piece_sets[0].bitboard(PieceKind::King), Bitboard::from_square(king_to));
    }

    #[test]
    fn inconsistent_moves_are_rejected_without_mutation() {
        let mut position = Position::new_game();
        let original = position.clone();

        let from_empty = Move::encode(64, 48, MoveType::Quiet, None).expect("valid encoding");
        let onto_friend = Move::encode(112, 96, MoveType::Quiet, None).expect("valid encoding");
        let capture_nothing = Move::encode(97, 81, MoveType::Capture, None).expect("valid encoding");
        let off_board = Move::encode(96, 8, MoveType::Quiet, None).expect("valid encoding");
        for mv in [Move::NULL, from_empty, onto_friend, capture_nothing, off_board] {
            assert!(position.make_move(mv).is_err(), "{mv:?} should be rejected");
            assert_eq!(position, original);
        }
    }

    #[test]
    fn unmake_without_history_fails() {
        let mut position = Position::default();
        assert_eq!(position.unmake_move(), Err(ChessErrors::EmptyUndoStack));
    }

    #[test]
    fn apply_move_leaves_the_source_untouched() {
        let position = Position::new_game();
        let mv = PseudoLegalMoveGenerator::default().generate_moves(&position)[0];
        let next = position.apply_move(mv).expect("generated move should apply");
        assert_eq!(position, Position::new_game());
        assert_eq!(next.turn, Player::SECOND);
        assert_eq!(next.undo_stack.len(), 1);
    }
}
