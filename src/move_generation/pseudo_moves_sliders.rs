//! Pseudo-legal bishop, rook and queen moves.
//!
//! Each piece instance walks its rays; the ray includes the first blocker, and
//! `push_targets` drops it again when the blocker is friendly.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::MoveContext;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_bishop_moves(ctx: &MoveContext, out: &mut Vec<Move>) {
    for from in ctx.own_set.bitboard(PieceKind::Bishop).squares() {
        ctx.push_targets(from, bishop_attacks(ctx.geometry, from, ctx.occupied), out);
    }
}

pub fn generate_rook_moves(ctx: &MoveContext, out: &mut Vec<Move>) {
    for from in ctx.own_set.bitboard(PieceKind::Rook).squares() {
        ctx.push_targets(from, rook_attacks(ctx.geometry, from, ctx.occupied), out);
    }
}

pub fn generate_queen_moves(ctx: &MoveContext, out: &mut Vec<Move>) {
    for from in ctx.own_set.bitboard(PieceKind::Queen).squares() {
        ctx.push_targets(from, queen_attacks(ctx.geometry, from, ctx.occupied), out);
    }
}
