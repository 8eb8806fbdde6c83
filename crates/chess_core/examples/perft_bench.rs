//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth]
//!
//! Examples:
//!   # Default: depth 4 from starting position
//!   cargo flamegraph --example perft_bench -p chess_core
//!
//!   # Custom depth, with a per-root-move breakdown
//!   cargo flamegraph --example perft_bench -p chess_core -- 5 divide

use chess_core::{perft, perft_divide, Board, Color};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let divide = args.get(2).is_some_and(|s| s == "divide");

    let board = Board::startpos();

    println!("=== Perft Benchmark ===");
    println!("Position: initial");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&board, Color::Light, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = if divide {
        let mut total = 0u64;
        for (mv, count) in perft_divide(&board, Color::Light, depth) {
            println!("{mv}: {count}");
            total += count;
        }
        println!();
        total
    } else {
        perft(&board, Color::Light, depth)
    };
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}
