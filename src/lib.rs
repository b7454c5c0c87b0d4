//! Crate root module declarations for the Stonkfish variant-board engine core.
//!
//! Boards of any shape up to 16x16 share one 256-bit bitboard layout. This
//! file exposes the board state, attack patterns, move generation and perft,
//! and the text utilities so the perft runner, benches and external tooling
//! can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod bitboard;
    pub mod board_geometry;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece_set;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider_rays;
}

pub mod move_generation {
    pub mod legality_filter;
    pub mod move_apply;
    pub mod move_generator;
    pub mod move_shared;
    pub mod perft;
    pub mod pseudo_legal_generator;
    pub mod pseudo_moves_custom;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliders;
}

pub mod utils {
    pub mod board_generator;
    pub mod board_parser;
    pub mod random_playout;
    pub mod render_game_state;
    pub mod square_names;
}
