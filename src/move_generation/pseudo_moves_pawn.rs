//! Pseudo-legal pawn move generation.
//!
//! Pushes, double pushes from the start row and diagonal captures, each
//! produced for all pawns at once from shifted bitboards. Arrivals on the
//! promotion row expand into one move per promotion piece. En passant is not
//! generated.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::MoveContext;
use crate::moves::move_descriptions::{promotion_code, Move, MoveType, NO_PROMOTION_CODE};
use crate::moves::pawn_moves::{
    captures_toward, double_pushes, forward_delta, pawn_source, promotion_row, single_pushes,
};

pub fn generate_pawn_moves(ctx: &MoveContext, out: &mut Vec<Move>) {
    let pawns = ctx.own_set.bitboard(PieceKind::Pawn);
    if pawns.is_empty() {
        return;
    }

    let side = ctx.side;
    let empty = ctx.geometry.playable() & !ctx.occupied;

    let pushes = single_pushes(ctx.geometry, pawns, side, empty);
    emit_pawn_targets(ctx, pushes, forward_delta(side, 1, 0), false, out);

    let doubles = double_pushes(ctx.geometry, pawns, side, empty);
    emit_pawn_targets(ctx, doubles, forward_delta(side, 2, 0), false, out);

    for d_col in [-1i8, 1] {
        let captures = captures_toward(ctx.geometry, pawns, side, d_col, ctx.enemy);
        emit_pawn_targets(ctx, captures, forward_delta(side, 1, d_col), true, out);
    }
}

fn emit_pawn_targets(
    ctx: &MoveContext,
    targets: Bitboard,
    delta: i32,
    capture: bool,
    out: &mut Vec<Move>,
) {
    let last_row = promotion_row(ctx.geometry, ctx.side);

    for to in targets.squares() {
        let from = pawn_source(to, delta);
        if ctx.geometry.coord(to).0 != last_row {
            out.push(Move::quiet_or_capture(from, to, capture));
            continue;
        }

        let move_type = if capture {
            MoveType::PromotionCapture
        } else {
            MoveType::Promotion
        };
        for kind in PROMOTION_KINDS {
            let code = promotion_code(kind).unwrap_or(NO_PROMOTION_CODE);
            out.push(Move::pack(from, to, move_type, code));
        }
    }
}
