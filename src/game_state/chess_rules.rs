//! Canonical board descriptions.
//!
//! Starting layouts used to initialise positions in tests, benches and the
//! perft runner. Custom letters are placeholders until movement rules are
//! attached with `Position::set_custom_movement`.

/// Standard chess starting position.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Ten-file layout with an archbishop (`a`) and a chancellor (`c`).
pub const CAPABLANCA_POSITION: &str =
    "rnabqkbcnr/pppppppppp/10/10/10/10/PPPPPPPPPP/RNABQKBCNR w KQkq - 0 1";

/// Sixteen-file, sixteen-rank layout exercising two-digit run-lengths.
pub const WIDE_POSITION: &str = "rnbqkbnrrnbqkbnr/pppppppppppppppp/16/16/16/16/16/16/16/16/16/16/16/16/PPPPPPPPPPPPPPPP/RNBQKBNRRNBQKBNR w - - 0 1";
