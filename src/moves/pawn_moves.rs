//! Set-wise pawn target generation.
//!
//! All pawns of a player are advanced together by shifting their bitboard one
//! row stride (plus one column for captures). Results are masked with the
//! playable squares, and capture sources on the edge column are dropped before
//! the shift so that no pawn wraps into the next row.

use crate::game_state::board_geometry::ROW_STRIDE;
use crate::game_state::chess_types::{Bitboard, BoardGeometry, Player, Square};

/// Row on which `player`'s pawns may double step.
#[inline]
pub fn pawn_start_row(geometry: &BoardGeometry, player: Player) -> u8 {
    if player.forward_rows() < 0 {
        geometry.height().saturating_sub(2)
    } else {
        1
    }
}

/// Farthest row for `player`.
#[inline]
pub fn promotion_row(geometry: &BoardGeometry, player: Player) -> u8 {
    if player.forward_rows() < 0 {
        0
    } else {
        geometry.height() - 1
    }
}

/// Index delta of `rows` forward steps plus `d_col` columns.
#[inline]
pub fn forward_delta(player: Player, rows: i32, d_col: i8) -> i32 {
    player.forward_rows() as i32 * rows * ROW_STRIDE as i32 + d_col as i32
}

#[inline]
fn shift_by(bb: Bitboard, delta: i32) -> Bitboard {
    if delta < 0 {
        bb >> delta.unsigned_abs()
    } else {
        bb << delta as u32
    }
}

/// Square a pawn came from when it landed on `destination` via `delta`.
#[inline]
pub fn pawn_source(destination: Square, delta: i32) -> Square {
    (destination as i32 - delta) as Square
}

pub fn single_pushes(
    geometry: &BoardGeometry,
    pawns: Bitboard,
    player: Player,
    empty: Bitboard,
) -> Bitboard {
    shift_by(pawns, forward_delta(player, 1, 0)) & empty & geometry.playable()
}

pub fn double_pushes(
    geometry: &BoardGeometry,
    pawns: Bitboard,
    player: Player,
    empty: Bitboard,
) -> Bitboard {
    let on_start = pawns & geometry.row_mask(pawn_start_row(geometry, player));
    let first_step = single_pushes(geometry, on_start, player, empty);
    single_pushes(geometry, first_step, player, empty)
        & !geometry.row_mask(promotion_row(geometry, player))
}

/// Diagonal captures toward `d_col` (`-1` or `1`) landing on `targets`.
pub fn captures_toward(
    geometry: &BoardGeometry,
    pawns: Bitboard,
    player: Player,
    d_col: i8,
    targets: Bitboard,
) -> Bitboard {
    let edge = if d_col < 0 {
        0
    } else {
        geometry.width() - 1
    };
    let sources = pawns & !geometry.column_mask(edge);
    shift_by(sources, forward_delta(player, 1, d_col)) & targets & geometry.playable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_promotion_rows_follow_board_height() {
        let geometry = BoardGeometry::new(8, 10).expect("8x10 should build");
        assert_eq!(pawn_start_row(&geometry, Player::FIRST), 8);
        assert_eq!(pawn_start_row(&geometry, Player::SECOND), 1);
        assert_eq!(promotion_row(&geometry, Player::FIRST), 0);
        assert_eq!(promotion_row(&geometry, Player::SECOND), 9);
    }

    #[test]
    fn pushes_move_all_pawns_one_row_forward() {
        let geometry = BoardGeometry::standard();
        let pawns = geometry.row_mask(6);
        let empty = geometry.playable() & !pawns;
        assert_eq!(
            single_pushes(&geometry, pawns, Player::FIRST, empty),
            geometry.row_mask(5)
        );
        assert_eq!(
            double_pushes(&geometry, pawns, Player::FIRST, empty),
            geometry.row_mask(4)
        );
    }

    #[test]
    fn blocked_first_step_blocks_double_push() {
        let geometry = BoardGeometry::standard();
        let e2 = geometry.to_index(6, 4).expect("on board");
        let e3 = geometry.to_index(5, 4).expect("on board");
        let pawns = Bitboard::from_square(e2);
        let mut empty = geometry.playable() & !pawns;
        empty.remove(e3);
        assert!(single_pushes(&geometry, pawns, Player::FIRST, empty).is_empty());
        assert!(double_pushes(&geometry, pawns, Player::FIRST, empty).is_empty());
    }

    #[test]
    fn edge_captures_do_not_wrap() {
        let geometry = BoardGeometry::new(16, 8).expect("16x8 should build");
        let left_edge = geometry.to_index(3, 0).expect("on board");
        let right_edge = geometry.to_index(3, 15).expect("on board");
        let pawns = Bitboard::from_square(left_edge) | Bitboard::from_square(right_edge);
        let everything = geometry.playable();

        let toward_left = captures_toward(&geometry, pawns, Player::FIRST, -1, everything);
        let toward_right = captures_toward(&geometry, pawns, Player::FIRST, 1, everything);
        assert_eq!(toward_left.squares().collect::<Vec<_>>(), vec![geometry.to_index(2, 14).expect("on board")]);
        assert_eq!(toward_right.squares().collect::<Vec<_>>(), vec![geometry.to_index(2, 1).expect("on board")]);
    }

    #[test]
    fn second_player_captures_downward() {
        let geometry = BoardGeometry::standard();
        let d7 = geometry.to_index(1, 3).expect("on board");
        let c6 = geometry.to_index(2, 2).expect("on board");
        let e6 = geometry.to_index(2, 4).expect("on board");
        let pawns = Bitboard::from_square(d7);
        let targets = geometry.playable();

        let toward_left = captures_toward(&geometry, pawns, Player::SECOND, -1, targets);
        let toward_right = captures_toward(&geometry, pawns, Player::SECOND, 1, targets);
        assert_eq!(toward_left, Bitboard::from_square(c6));
        assert_eq!(toward_right, Bitboard::from_square(e6));
        assert_eq!(pawn_source(e6, forward_delta(Player::SECOND, 1, 1)), d7);
    }
}
