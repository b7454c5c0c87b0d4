//! Randomised make/unmake audit.
//!
//! Plays random generated moves from a position, checking piece disjointness
//! after every move, then unwinds the whole line and compares the result
//! with the starting position.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutReport {
    /// Moves actually played; shorter than requested if a side ran out.
    pub line: Vec<Move>,
    /// Whether unwinding the line gave back the starting position.
    pub restored: bool,
}

pub fn random_playout<G: MoveGenerator + ?Sized, R: Rng + ?Sized>(
    generator: &G,
    position: &mut Position,
    plies: usize,
    rng: &mut R,
) -> ChessResult<PlayoutReport> {
    let original = position.clone();
    let mut line = Vec::with_capacity(plies);

    for _ in 0..plies {
        let moves = generator.generate_moves(position);
        let Some(&mv) = moves.as_slice().choose(rng) else {
            break;
        };
        position.make_move(mv)?;
        line.push(mv);
        position.check_disjoint()?;
    }

    for _ in 0..line.len() {
        position.unmake_move()?;
    }

    Ok(PlayoutReport {
        restored: *position == original,
        line,
    })
}
