//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always reported for one fixed `perspective` color, which is
//! the maximizing side; the other color minimizes. Every child position is
//! a fresh copy of its parent, so the recursion never shares a board with a
//! sibling and is safe to split across threads at the root.

use chess_core::{all_legal_moves, in_check, Board, Color, Move};
use rayon::prelude::*;

use crate::eval::evaluate;

/// Score for a side with no legal moves while in check.
///
/// It is reported as is in the perspective frame, whichever color is stuck.
pub const MATE_SCORE: i32 = -999_999;

/// Depth used by the bot above the easy tier.
pub const DEFAULT_DEPTH: u8 = 3;

/// Score and best move of a searched node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub score: i32,
    /// None at depth 0 and at nodes without legal moves
    pub best_move: Option<Move>,
}

/// Minimax with alpha-beta pruning.
///
/// # Arguments
/// * `board` - Position to search; it is only read
/// * `depth` - Remaining plies
/// * `to_move` - Color whose moves are expanded at this node
/// * `perspective` - Color the score is reported for (the maximizer)
/// * `alpha`, `beta` - Search window; use `i32::MIN` / `i32::MAX` at the root
/// * `nodes` - Counter for nodes visited (for statistics)
///
/// Ties keep the first move in generation order (row-major squares, then
/// per-piece order). Pruning only skips siblings once `beta <= alpha`, so
/// the root score and move are the same as a full-width minimax.
pub fn search(
    board: &Board,
    depth: u8,
    to_move: Color,
    perspective: Color,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> SearchOutcome {
    *nodes += 1;

    if depth == 0 {
        return SearchOutcome {
            score: evaluate(board, perspective),
            best_move: None,
        };
    }

    let moves = all_legal_moves(board, to_move);
    if moves.is_empty() {
        let score = if in_check(board, to_move) { MATE_SCORE } else { 0 };
        return SearchOutcome {
            score,
            best_move: None,
        };
    }

    let maximizing = to_move == perspective;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for mv in moves {
        let child = board.after(mv);
        let score = search(
            &child,
            depth - 1,
            to_move.other(),
            perspective,
            alpha,
            beta,
            nodes,
        )
        .score;

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }
        if beta <= alpha {
            break; // cutoff
        }
    }

    SearchOutcome {
        score: best_score,
        best_move,
    }
}

/// Searches each root move on its own thread-local board copy.
///
/// Root moves get a full window, so no bound is shared between threads.
/// The first best move in generation order wins, matching [`search`].
pub fn search_root_parallel(
    board: &Board,
    depth: u8,
    color: Color,
    nodes: &mut u64,
) -> SearchOutcome {
    let moves = all_legal_moves(board, color);
    if depth == 0 || moves.is_empty() {
        return search(board, depth, color, color, i32::MIN, i32::MAX, nodes);
    }

    let scored: Vec<(Move, i32, u64)> = moves
        .par_iter()
        .map(|&mv| {
            let mut child_nodes = 0u64;
            let child = board.after(mv);
            let out = search(
                &child,
                depth - 1,
                color.other(),
                color,
                i32::MIN,
                i32::MAX,
                &mut child_nodes,
            );
            (mv, out.score, child_nodes)
        })
        .collect();

    *nodes += 1;
    let mut best = SearchOutcome {
        score: i32::MIN,
        best_move: None,
    };
    for (mv, score, child_nodes) in scored {
        *nodes += child_nodes;
        if score > best.score {
            best = SearchOutcome {
                score,
                best_move: Some(mv),
            };
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
