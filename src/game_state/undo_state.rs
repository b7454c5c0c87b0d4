use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: PieceSlot,
    pub captured: Option<(Player, PieceSlot)>,
    /// Rook origin and destination of a castle.
    pub castle_rook: Option<(Square, Square)>,
    pub prev_turn: Player,
}
