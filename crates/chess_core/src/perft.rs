use crate::{board::Board, movegen::all_legal_moves, types::Color};

/// Pure perft node count.
/// Counts all legal move sequences of length `depth` for `color` to move.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(board, color);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&board.after(mv), color.other(), depth - 1))
        .sum()
}

/// Per-root-move node counts, handy for diffing against another generator.
pub fn perft_divide(board: &Board, color: Color, depth: u8) -> Vec<(crate::types::Move, u64)> {
    all_legal_moves(board, color)
        .into_iter()
        .map(|mv| {
            let nodes = perft(&board.after(mv), color.other(), depth.saturating_sub(1));
            (mv, nodes)
        })
        .collect()
}
