pub mod attacks;
pub mod board;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use game::*;
pub use movegen::*;
pub use notation::move_notation;
pub use perft::{perft, perft_divide};
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every move picker (search, random, ...)
// =============================================================================

/// Result of a move choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the mover's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

/// Trait that all move pickers implement.
///
/// Engines only ever see a borrowed board and work on their own copies, so
/// the live game is never touched while a move is being chosen.
pub trait Engine: Send {
    /// Choose a move for `color` on `board`.
    fn choose_move(&mut self, board: &Board, color: Color) -> SearchResult;

    /// Returns the engine's name for logs and summaries
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
