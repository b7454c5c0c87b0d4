use crate::game_state::chess_types::*;
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;

/// Occupancy snapshot of the side to move, shared by the per-kind generators.
pub struct MoveContext<'a> {
    pub geometry: &'a BoardGeometry,
    pub tables: &'a AttackTables,
    pub side: Player,
    pub own_set: &'a PieceSet,
    pub own: Bitboard,
    pub enemy: Bitboard,
    pub occupied: Bitboard,
}

impl<'a> MoveContext<'a> {
    pub fn new(position: &'a Position, tables: &'a AttackTables) -> Option<Self> {
        let side = position.turn;
        let own_set = position.piece_set(side).ok()?;
        let own = own_set.occupancy();
        let enemy = position.enemy_occupancy(side);
        Some(Self {
            geometry: &position.geometry,
            tables,
            side,
            own_set,
            own,
            enemy,
            occupied: own | enemy,
        })
    }

    /// Emit one Quiet or Capture move per target not held by the mover.
    #[inline]
    pub fn push_targets(&self, from: Square, targets: Bitboard, out: &mut Vec<Move>) {
        for to in (targets & !self.own).squares() {
            out.push(Move::quiet_or_capture(from, to, self.enemy.contains(to)));
        }
    }
}

/// First occupied square walking from `from` by `(d_row, d_col)`, with the
/// number of steps taken to reach it.
pub fn nearest_occupied(
    geometry: &BoardGeometry,
    from: Square,
    d_row: i8,
    d_col: i8,
    occupancy: Bitboard,
) -> Option<(Square, u8)> {
    let mut current = from;
    let mut steps = 0u8;
    while let Some(next) = geometry.offset(current, d_row, d_col) {
        steps += 1;
        if occupancy.contains(next) {
            return Some((next, steps));
        }
        current = next;
    }
    None
}

/// Row a player's king and rooks start on.
#[inline]
pub fn back_row(geometry: &BoardGeometry, player: Player) -> u8 {
    if player.forward_rows() < 0 {
        geometry.height() - 1
    } else {
        0
    }
}
