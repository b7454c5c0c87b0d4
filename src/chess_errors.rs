//! Errors used throughout the engine core.
//!
//! `ChessErrors` is the single error type across the crate so failures from
//! the bitboard layer, the board geometry, move packing, the board loader and
//! make/unmake all propagate through one `?` chain.
//!
//! Usage guidelines:
//! - `MalformedBoardDescription` is the only variant produced from user input
//!   and is suitable for presenting to end users.
//! - Every other variant signals a broken contract (an index outside the
//!   bitboard, a corrupted packed move, a move that does not fit the
//!   position). Callers are not expected to recover from those.

use thiserror::Error;

/// Unified error type for the engine core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A bit index outside `0..capacity` was handed to the bitboard layer.
    #[error("bit index {index} is outside the bitboard capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// A coordinate or square index that lies outside the declared board,
    /// including the padding columns beyond `width`.
    #[error("square (row {row}, col {col}) is off a {width}x{height} board")]
    SquareOffBoard {
        row: usize,
        col: usize,
        width: u8,
        height: u8,
    },

    /// Board dimensions that cannot be mapped onto the fixed row stride.
    #[error("unsupported board geometry {width}x{height}")]
    InvalidGeometry { width: usize, height: usize },

    /// A packed move whose fields are out of range or inconsistent.
    #[error("invalid move encoding: {0}")]
    InvalidMoveEncoding(String),

    /// The textual board description could not be parsed.
    #[error("malformed board description: {0}")]
    MalformedBoardDescription(String),

    /// Two pieces claim the same square.
    #[error("square {square} is occupied by more than one piece")]
    OverlappingPieces { square: usize },

    /// A move could not be applied to the position it was given.
    #[error("cannot apply move: {0}")]
    IllegalMoveApplication(String),

    /// `unmake_move` was called with nothing left to undo.
    #[error("no move to unmake")]
    EmptyUndoStack,

    /// A player id without a piece set in the position.
    #[error("unknown player {0}")]
    UnknownPlayer(u8),

    /// A root-parallel perft worker panicked.
    #[error("perft worker thread panicked")]
    WorkerPanicked,
}

pub type ChessResult<T> = Result<T, ChessErrors>;

#[cfg(test)]
mod tests {
    use super::ChessErrors;

    #[test]
    fn display_names_the_offending_index() {
        let err = ChessErrors::IndexOutOfRange {
            index: 300,
            capacity: 256,
        };
        assert_eq!(
            err.to_string(),
            "bit index 300 is outside the bitboard capacity 256"
        );
    }
}
