//! Material-only position evaluation.

use chess_core::{Board, Color};

/// Net material for `perspective`, in centipawns.
///
/// Every piece on the board counts its value from
/// [`PieceKind::value`](chess_core::PieceKind::value): added if it belongs to
/// `perspective`, subtracted otherwise. Kings are included, so a board that
/// is missing a king is scored as a huge swing.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    board
        .squares
        .iter()
        .flatten()
        .map(|pc| {
            let v = pc.kind.value();
            if pc.color == perspective {
                v
            } else {
                -v
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
