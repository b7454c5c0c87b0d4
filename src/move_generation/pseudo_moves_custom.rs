use crate::move_generation::move_shared::MoveContext;
use crate::moves::attack_tables::leaper_attacks;
use crate::moves::move_descriptions::Move;
use crate::moves::slider_rays::slide_attacks;

/// Moves of custom pieces that carry a `Movement`. Pieces without one stay put.
pub fn generate_custom_moves(ctx: &MoveContext, out: &mut Vec<Move>) {
    for piece in &ctx.own_set.custom {
        let Some(movement) = &piece.movement else {
            continue;
        };
        for from in piece.occupancy.squares() {
            let targets = leaper_attacks(ctx.geometry, from, &movement.jumps)
                | slide_attacks(ctx.geometry, from, &movement.slides, ctx.occupied);
            ctx.push_targets(from, targets, out);
        }
    }
}
