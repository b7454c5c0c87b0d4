//! Pseudo-legal move generation pipeline.
//!
//! Runs the per-kind generators in a fixed order (pawn, knight, bishop, rook,
//! queen, king, custom). Moves obey piece movement, board edges and friendly
//! occupancy, but may still leave the mover's king attacked; see
//! `legality_filter` for the stage that removes those.

use std::borrow::Cow;

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::move_shared::MoveContext;
use crate::move_generation::pseudo_moves_custom::generate_custom_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct PseudoLegalMoveGenerator {
    tables: AttackTables,
}

impl Default for PseudoLegalMoveGenerator {
    fn default() -> Self {
        Self::new(BoardGeometry::standard())
    }
}

impl PseudoLegalMoveGenerator {
    /// Precompute leaper tables for `geometry`. Positions with another shape
    /// still work; their tables are built per call.
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            tables: AttackTables::new(geometry),
        }
    }

    fn tables_for(&self, geometry: &BoardGeometry) -> Cow<'_, AttackTables> {
        if self.tables.geometry() == geometry {
            Cow::Borrowed(&self.tables)
        } else {
            Cow::Owned(AttackTables::new(*geometry))
        }
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        let tables = self.tables_for(&position.geometry);
        let Some(ctx) = MoveContext::new(position, &tables) else {
            return Vec::new();
        };

        let mut moves = Vec::<Move>::with_capacity(128);
        generate_pawn_moves(&ctx, &mut moves);
        generate_knight_moves(&ctx, &mut moves);
        generate_bishop_moves(&ctx, &mut moves);
        generate_rook_moves(&ctx, &mut moves);
        generate_queen_moves(&ctx, &mut moves);
        generate_king_moves(&ctx, &mut moves);
        generate_custom_moves(&ctx, &mut moves);
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::PseudoLegalMoveGenerator;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::moves::move_descriptions::{Move, MoveType};

    fn generate(description: &str) -> (Position, Vec<Move>) {
        let position = Position::from_description(description).expect("description should parse");
        let moves = PseudoLegalMoveGenerator::new(position.geometry).generate_moves(&position);
        (position, moves)
    }

    fn count_type(moves: &[Move], move_type: MoveType) -> usize {
        moves.iter().filter(|mv| mv.move_type() == move_type).count()
    }

    #[test]
    fn lone_rook_in_the_corner_has_fourteen_quiet_moves() {
        let (_, moves) = generate("R7/8/8/8/8/8/8/8 w");
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|mv| mv.move_type() == MoveType::Quiet));
    }

    #[test]
    fn enemy_pawn_on_the_row_is_captured_and_blocks() {
        let (position, moves) = generate("R2p4/8/8/8/8/8/8/8 w");
        let row_moves: Vec<&Move> = moves
            .iter()
            .filter(|mv| position.geometry.coord(mv.destination()).0 == 0)
            .collect();

        let quiet: Vec<u8> = row_moves
            .iter()
            .filter(|mv| mv.move_type() == MoveType::Quiet)
            .map(|mv| mv.destination())
            .collect();
        assert_eq!(quiet, vec![1, 2]);
        let captures: Vec<u8> = row_moves
            .iter()
            .filter(|mv| mv.move_type() == MoveType::Capture)
            .map(|mv| mv.destination())
            .collect();
        assert_eq!(captures, vec![3]);
        assert!(moves.iter().all(|mv| position.geometry.coord(mv.destination()).1 <= 3));
        assert_eq!(moves.len(), 3 + 7);
    }

    #[test]
    fn friendly_blocker_is_not_captured() {
        let (_, moves) = generate("R2P4/8/8/8/8/8/8/8 w");
        assert_eq!(count_type(&moves, MoveType::Capture), 0);
        // The pawn already stands on its last row and cannot push.
        assert_eq!(moves.len(), 2 + 7);
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let (_, moves) = generate("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(moves.len(), 20);
        assert_eq!(count_type(&moves, MoveType::Quiet), 20);
    }

    #[test]
    fn second_player_also_has_twenty_moves_at_the_start() {
        let (_, moves) = generate("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn generation_is_deterministic() {
        let (position, first) = generate("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let second = PseudoLegalMoveGenerator::default().generate_moves(&position);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_side_generates_nothing() {
        let (_, moves) = generate("8/8/8/3k4/8/8/8/8 w");
        assert!(moves.is_empty());
    }

    #[test]
    fn pawn_reaching_the_last_row_promotes_four_ways() {
        let (_, moves) = generate("1r6/P7/8/8/8/8/8/8 w");
        assert_eq!(count_type(&moves, MoveType::Promotion), 4);
        assert_eq!(count_type(&moves, MoveType::PromotionCapture), 4);
        let kinds: Vec<PieceKind> = moves.iter().filter_map(|mv| mv.promotion()).take(4).collect();
        assert_eq!(kinds, PROMOTION_KINDS.to_vec());
    }

    #[test]
    fn second_player_promotes_on_the_bottom_row() {
        let (_, moves) = generate("8/8/8/8/8/8/p7/8 b");
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.destination() == 7 * 16));
    }

    #[test]
    fn double_push_uses_the_row_derived_from_height() {
        let (position, moves) = generate("8/8/8/8/8/8/8/8/4P3/8 w");
        assert_eq!(moves.len(), 2);
        let destinations: Vec<(u8, u8)> = moves
            .iter()
            .map(|mv| position.geometry.coord(mv.destination()))
            .collect();
        assert_eq!(destinations, vec![(7, 4), (6, 4)]);
    }

    #[test]
    fn knight_on_the_sixteenth_column_does_not_wrap() {
        let (position, moves) = generate("16/16/16/16/16/16/16/15N w");
        assert_eq!(moves.len(), 2);
        for mv in moves {
            assert!(position.geometry.coord(mv.destination()).1 >= 13);
        }
    }

    #[test]
    fn rook_on_a_narrow_board_never_enters_the_padding() {
        let (position, moves) = generate("5/5/5/5/4R w");
        assert_eq!(moves.len(), 8);
        for mv in moves {
            assert!(position.geometry.is_on_board(mv.destination()));
        }
    }

    #[test]
    fn castling_needs_a_clear_path_to_a_friendly_rook() {
        let (_, moves) = generate("8/8/8/8/8/8/8/R3K2R w");
        assert_eq!(count_type(&moves, MoveType::CastleRight), 1);
        assert_eq!(count_type(&moves, MoveType::CastleLeft), 1);

        let (_, blocked) = generate("8/8/8/8/8/8/8/RN2K1NR w");
        assert_eq!(count_type(&blocked, MoveType::CastleRight), 0);
        assert_eq!(count_type(&blocked, MoveType::CastleLeft), 0);

        let (_, off_row) = generate("8/8/8/8/8/8/R3K2R/8 w");
        assert_eq!(count_type(&off_row, MoveType::CastleRight), 0);

        let (_, black) = generate("r3k2r/8/8/8/8/8/8/8 b");
        assert_eq!(count_type(&black, MoveType::CastleRight), 1);
        assert_eq!(count_type(&black, MoveType::CastleLeft), 1);
    }

    #[test]
    fn custom_pieces_move_by_their_movement() {
        let mut position =
            Position::from_description("8/8/8/3A4/8/8/8/8 w").expect("description should parse");
        let generator = PseudoLegalMoveGenerator::default();
        assert!(generator.generate_moves(&position).is_empty());

        position.set_custom_movement(
            'a',
            Movement {
                jumps: vec![(-2, -1), (-2, 1), (2, -1), (2, 1)],
                slides: vec![(0, 1)],
            },
        );
        let moves = generator.generate_moves(&position);
        assert_eq!(moves.len(), 4 + 4);
    }

    #[test]
    fn generator_handles_positions_of_another_shape() {
        let generator = PseudoLegalMoveGenerator::default();
        let position = Position::from_description("10/10/10/10/10/10/10/R9 w").expect("description should parse");
        assert_eq!(generator.generate_moves(&position).len(), 9 + 7);
    }
}
