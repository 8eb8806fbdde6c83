//! Classical Chess Engine
//!
//! Minimax with alpha-beta pruning over a material-only evaluation.
//! This is the bot's "medium" tier.

mod eval;
mod search;

use chess_core::{Board, Color, Engine, SearchResult};
use tracing::debug;

pub use eval::evaluate;
pub use search::{search, search_root_parallel, SearchOutcome, DEFAULT_DEPTH, MATE_SCORE};

/// Classical chess engine using fixed-depth minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax rooted at the mover's perspective, depth 3 by default
/// - Material evaluation (kings included)
/// - Optional root-move parallelism via rayon
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    depth: u8,
    parallel_root: bool,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            parallel_root: false,
            nodes: 0,
        }
    }

    /// Split the root moves across the rayon pool.
    pub fn parallel_root(mut self, enabled: bool) -> Self {
        self.parallel_root = enabled;
        self
    }
}

impl Engine for ClassicalEngine {
    fn choose_move(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 0;

        let outcome = if self.parallel_root {
            search_root_parallel(board, self.depth, color, &mut self.nodes)
        } else {
            search(
                board,
                self.depth,
                color,
                color,
                i32::MIN,
                i32::MAX,
                &mut self.nodes,
            )
        };

        debug!(
            engine = self.name(),
            %color,
            depth = self.depth,
            nodes = self.nodes,
            score = outcome.score,
            best = ?outcome.best_move.map(|m| m.to_string()),
            "search finished"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: self.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
mod lib_tests;
