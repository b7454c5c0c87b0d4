//! Legality extension point.
//!
//! The pseudo-legal generator never asks whether the mover's king is left
//! attacked. A `LegalityFilter` inspects each candidate with the position
//! before and after the move and decides whether to keep it, so a king-safety
//! rule can be layered on without touching the generators.

use log::warn;

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

pub trait LegalityFilter: Send + Sync {
    fn allows(&self, before: &Position, mv: Move, after: &Position) -> bool;
}

/// Keeps every pseudo-legal move.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl LegalityFilter for AcceptAll {
    #[inline]
    fn allows(&self, _before: &Position, _mv: Move, _after: &Position) -> bool {
        true
    }
}

/// Wraps a generator and drops the moves a filter rejects.
pub struct FilteredMoveGenerator<G, F> {
    inner: G,
    filter: F,
}

impl<G: MoveGenerator, F: LegalityFilter> FilteredMoveGenerator<G, F> {
    pub fn new(inner: G, filter: F) -> Self {
        Self { inner, filter }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: MoveGenerator, F: LegalityFilter> MoveGenerator for FilteredMoveGenerator<G, F> {
    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        let candidates = self.inner.generate_moves(position);
        let mut scratch = position.clone();
        let mut kept = Vec::with_capacity(candidates.len());

        for mv in candidates {
            if let Err(err) = scratch.make_move(mv) {
                warn!("dropping {mv:?}: {err}");
                continue;
            }
            if self.filter.allows(position, mv, &scratch) {
                kept.push(mv);
            }
            if let Err(err) = scratch.unmake_move() {
                warn!("could not unmake {mv:?}: {err}");
                scratch = position.clone();
            }
        }

        kept
    }
}
