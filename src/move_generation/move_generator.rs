use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

/// Source of candidate moves for the side to move.
///
/// Implementations never fail on a structurally valid `Position`; a side with
/// no pieces (or no piece set) yields an empty list. The order of the returned
/// moves must be reproducible for an unchanged position.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &Position) -> Vec<Move>;
}

pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_moves(&self, _position: &Position) -> Vec<Move> {
        Vec::new()
    }
}
