//! Attack detection on the mailbox board.
//!
//! Everything here answers one question: could a piece of a given color
//! capture on a given square with its next move? Check detection and
//! castling safety are both built on it.

use crate::board::Board;
use crate::types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// True if some piece of color `by` attacks `target`.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    // A pawn of `by` attacks from one row behind its advance direction.
    let back = -by.pawn_direction();
    for dc in [-1, 1] {
        if let Some(s) = target.offset(back, dc) {
            if let Some(pc) = board.piece_at(s) {
                if pc.color == by && pc.kind == PieceKind::Pawn {
                    return true;
                }
            }
        }
    }

    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(s) = target.offset(dr, dc) {
            if let Some(pc) = board.piece_at(s) {
                if pc.color == by && pc.kind == PieceKind::Knight {
                    return true;
                }
            }
        }
    }

    // Ray-cast outward; only the first occupied square on each ray matters.
    for (dirs, diagonal) in [(&ORTHOGONAL, false), (&DIAGONAL, true)] {
        for &(dr, dc) in dirs {
            let mut dist = 1;
            let mut cur = target.offset(dr, dc);
            while let Some(s) = cur {
                if let Some(pc) = board.piece_at(s) {
                    if pc.color == by && ray_attacker(pc.kind, diagonal, dist) {
                        return true;
                    }
                    break;
                }
                dist += 1;
                cur = s.offset(dr, dc);
            }
        }
    }

    false
}

fn ray_attacker(kind: PieceKind, diagonal: bool, dist: u8) -> bool {
    match kind {
        PieceKind::King => dist == 1,
        PieceKind::Queen => true,
        PieceKind::Bishop => diagonal,
        PieceKind::Rook => !diagonal,
        PieceKind::Pawn | PieceKind::Knight => false,
    }
}

/// True if `color`'s king is attacked.
///
/// A board with no king of `color` counts as check. That keeps malformed
/// positions from ever looking safe.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(ksq) => is_attacked(board, ksq, color.other()),
        None => true,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
