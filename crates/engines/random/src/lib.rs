//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Used for:
//! - The bot's easy tier
//! - The fallback when search returns no move
//! - Stress testing move generation in self-play

use chess_core::{all_legal_moves, Board, Color, Engine, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A chess engine that plays random legal moves.
///
/// There is no evaluation. With [`RandomEngine::seeded`] the sequence of
/// choices is reproducible, which self-play and tests rely on.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks uniformly from `moves`.
    pub fn pick(&mut self, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).copied()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, color: Color) -> SearchResult {
        let moves = all_legal_moves(board, color);

        SearchResult {
            best_move: self.pick(&moves),
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
