//! Move-tree traversal for validating the generator.
//!
//! `perft` walks the tree in place with make/unmake. The threaded and
//! copy-make variants must report the same counts and exist to cross-check
//! the in-place path.

use std::sync::Arc;
use std::thread;

use log::{debug, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::utils::square_names::move_text;

/// Leaf statistics for a perft run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
    pub castles: u64,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: Move) {
        let move_type = mv.move_type();
        self.nodes += 1;
        if move_type.is_capture() {
            self.captures += 1;
        }
        if move_type.is_promotion() {
            self.promotions += 1;
        }
        if move_type.is_castle() {
            self.castles += 1;
        }
    }
}

/// Count leaf nodes `depth` plies below `position`.
///
/// Counts are pseudo-legal: moves that leave the mover's king attacked are
/// still counted, so from depth 4 of the standard start onward they exceed
/// the legal reference tables (197,742 against 197,281) unless the generator
/// is wrapped in a `FilteredMoveGenerator`.
///
/// The position is restored before returning, including on error.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &mut Position,
    depth: u32,
) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generator.generate_moves(position);
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        position.make_move(mv)?;
        let child = perft(generator, position, depth - 1);
        position.unmake_move()?;
        nodes += child?;
    }
    Ok(nodes)
}

/// Like `perft`, also classifying the moves that reach the leaves.
pub fn perft_counts<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &mut Position,
    depth: u32,
) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_counts_recurse(generator, position, depth, &mut counts)?;
    Ok(counts)
}

fn perft_counts_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &mut Position,
    depth: u32,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let moves = generator.generate_moves(position);
    if depth == 1 {
        moves.into_iter().for_each(|mv| counts.record_leaf(mv));
        return Ok(());
    }

    for mv in moves {
        position.make_move(mv)?;
        let child = perft_counts_recurse(generator, position, depth - 1, counts);
        position.unmake_move()?;
        child?;
    }
    Ok(())
}

/// Node count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &mut Position,
    depth: u32,
) -> ChessResult<Vec<(String, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let geometry = position.geometry;
    let moves = generator.generate_moves(position);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let text = move_text(&geometry, mv)?;
        position.make_move(mv)?;
        let child = perft(generator, position, depth - 1);
        position.unmake_move()?;
        let nodes = child?;
        trace!("{text}: {nodes}");
        out.push((text, nodes));
    }
    Ok(out)
}

/// Root-parallel perft: one thread per root move, each on its own copy.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    position: &Position,
    depth: u32,
) -> ChessResult<u64> {
    if depth <= 1 {
        let mut scratch = position.clone();
        return perft(generator.as_ref(), &mut scratch, depth);
    }

    let root_moves = generator.generate_moves(position);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut child = position.apply_move(mv)?;
        handles.push(thread::spawn(move || {
            let nodes = perft(generator_ref.as_ref(), &mut child, depth - 1);
            debug!("root move {mv:?} finished: {nodes:?}");
            nodes
        }));
    }

    let mut total = 0u64;
    for handle in handles {
        total += handle.join().map_err(|_| ChessErrors::WorkerPanicked)??;
    }
    Ok(total)
}

/// Perft on cloned positions via `Position::apply_move`.
pub fn perft_copy_make<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    depth: u32,
) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0u64;
    for mv in generator.generate_moves(position) {
        let child = position.apply_move(mv)?;
        nodes += perft_copy_make(generator, &child, depth - 1)?;
    }
    Ok(nodes)
}
