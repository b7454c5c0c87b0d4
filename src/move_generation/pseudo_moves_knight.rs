use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::MoveContext;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(ctx: &MoveContext, out: &mut Vec<Move>) {
    for from in ctx.own_set.bitboard(PieceKind::Knight).squares() {
        ctx.push_targets(from, ctx.tables.knight(from), out);
    }
}
