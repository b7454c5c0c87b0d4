//! Perft runner for the pseudo-legal generator.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 4 --threads`
//! `cargo run --release --bin perft_runner -- --board "r3k2r/8/8/8/8/8/8/R3K2R w" --divide`
//! `cargo run --release --bin perft_runner -- --walk 200 --seed 7`
//!
//! Set `RUST_LOG=debug` to see per-root-move progress.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;

use stonkfish::chess_errors::ChessResult;
use stonkfish::game_state::chess_rules::STARTING_POSITION;
use stonkfish::game_state::chess_types::*;
use stonkfish::move_generation::move_generator::MoveGenerator;
use stonkfish::move_generation::perft::{perft_counts, perft_divide, perft_multi_threaded};
use stonkfish::move_generation::pseudo_legal_generator::PseudoLegalMoveGenerator;
use stonkfish::utils::random_playout::random_playout;
use stonkfish::utils::render_game_state::render_position;

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg_u32(flag: &str, default: u32) -> u32 {
    arg_value(flag)
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    arg_value(flag)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> ChessResult<()> {
    env_logger::init();

    let depth = parse_arg_u32("--depth", 3);
    let board = arg_value("--board").unwrap_or_else(|| STARTING_POSITION.to_owned());
    let mut position = Position::from_description(&board)?;
    let generator = PseudoLegalMoveGenerator::new(position.geometry);

    println!("perft run {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("board: {}", position.description());
    println!("{}\n", render_position(&position));

    if let Some(plies) = arg_value("--walk").and_then(|v| v.parse::<usize>().ok()) {
        let seed = parse_arg_u64("--seed", 0);
        let mut rng = StdRng::seed_from_u64(seed);
        let report = random_playout(&generator, &mut position, plies, &mut rng)?;
        println!(
            "walk: seed={seed} plies_played={} restored={}",
            report.line.len(),
            report.restored
        );
        return Ok(());
    }

    if has_flag("--divide") {
        let divided = perft_divide(&generator, &mut position, depth)?;
        for (text, nodes) in &divided {
            println!("{text}: {nodes}");
        }
        let total: u64 = divided.iter().map(|(_, nodes)| nodes).sum();
        println!("\nmoves={} nodes={total}", divided.len());
        return Ok(());
    }

    let start = Instant::now();
    if has_flag("--threads") {
        let shared: Arc<dyn MoveGenerator> = Arc::new(generator);
        let nodes = perft_multi_threaded(shared, &position, depth)?;
        report(depth, nodes, start);
    } else {
        let counts = perft_counts(&generator, &mut position, depth)?;
        report(depth, counts.nodes, start);
        println!(
            "captures={} promotions={} castles={}",
            counts.captures, counts.promotions, counts.castles
        );
    }
    Ok(())
}

fn report(depth: u32, nodes: u64, start: Instant) {
    let elapsed = start.elapsed();
    let nps = if elapsed.as_secs_f64() > 0.0 {
        (nodes as f64 / elapsed.as_secs_f64()) as u64
    } else {
        0
    };
    println!(
        "depth={depth} nodes={nodes} elapsed_ms={} nps={nps}",
        elapsed.as_millis()
    );
}
