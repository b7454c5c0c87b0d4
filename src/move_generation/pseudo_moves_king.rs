//! Pseudo-legal king moves and the structural castling analog.
//!
//! A king on its back row castles toward a friendly rook when the rook is the
//! nearest piece along the row and at least three columns away. The king lands
//! two squares toward the rook. Castling rights and attacked squares are not
//! considered here.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{back_row, nearest_occupied, MoveContext};
use crate::moves::move_descriptions::{Move, MoveType, NO_PROMOTION_CODE};

/// Smallest king-to-rook distance that leaves room for both to cross.
pub const MIN_CASTLE_DISTANCE: u8 = 3;

pub fn generate_king_moves(ctx: &MoveContext, out: &mut Vec<Move>) {
    let kings = ctx.own_set.bitboard(PieceKind::King);
    for from in kings.squares() {
        ctx.push_targets(from, ctx.tables.king(from), out);
        generate_castles(ctx, from, out);
    }
}

fn generate_castles(ctx: &MoveContext, from: Square, out: &mut Vec<Move>) {
    if ctx.geometry.coord(from).0 != back_row(ctx.geometry, ctx.side) {
        return;
    }

    let rooks = ctx.own_set.bitboard(PieceKind::Rook);
    for (d_col, move_type) in [(1i8, MoveType::CastleRight), (-1i8, MoveType::CastleLeft)] {
        let Some((rook_square, distance)) =
            nearest_occupied(ctx.geometry, from, 0, d_col, ctx.occupied)
        else {
            continue;
        };
        if distance < MIN_CASTLE_DISTANCE || !rooks.contains(rook_square) {
            continue;
        }
        if let Some(to) = ctx.geometry.offset(from, 0, 2 * d_col) {
            out.push(Move::pack(from, to, move_type, NO_PROMOTION_CODE));
        }
    }
}
