use crate::{
    attacks::{in_check, is_attacked, DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL},
    board::Board,
    types::*,
};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Legal moves of the piece on `from`, empty if the square is empty.
///
/// Each pseudo-legal candidate is played on its own copy of the board and
/// dropped if it leaves the mover's king attacked.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, from, &mut out);
    out
}

/// Appends the legal moves of the piece on `from` to `out`.
pub fn legal_moves_into(board: &Board, from: Square, out: &mut Vec<Move>) {
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    let start = out.len();
    pseudo_moves_into(board, from, out);

    let mut keep = start;
    for i in start..out.len() {
        let mv = out[i];
        if !in_check(&board.after(mv), pc.color) {
            out[keep] = mv;
            keep += 1;
        }
    }
    out.truncate(keep);
}

/// Every legal move for `color`, squares scanned row-major.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (sq, _) in board.pieces(color) {
        legal_moves_into(board, sq, &mut out);
    }
    out
}

/// True as soon as one legal move for `color` is found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    let mut buf = Vec::with_capacity(32);
    board.pieces(color).any(|(sq, _)| {
        buf.clear();
        legal_moves_into(board, sq, &mut buf);
        !buf.is_empty()
    })
}

/// Candidate moves of the piece on `from`, ignoring self-check.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    pseudo_moves_into(board, from, &mut out);
    out
}

fn pseudo_moves_into(board: &Board, from: Square, out: &mut Vec<Move>) {
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &DIAGONAL, out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ORTHOGONAL, out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &DIAGONAL, out);
            gen_slider(board, from, pc.color, &ORTHOGONAL, out);
        }
        PieceKind::King => {
            gen_steps(board, from, pc.color, &KING_OFFSETS, out);
            if !pc.has_moved {
                gen_castle(board, from, pc.color, out);
            }
        }
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.pawn_direction();

    // forward 1, then forward 2 from the home row through an empty square
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(Move::new(from, one));
            if from.row() == c.pawn_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Some(tpc) = board.piece_at(to) {
                if tpc.color != c {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    // Can't castle out of check
    if in_check(board, c) {
        return;
    }
    let enemy = c.other();

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        let Some(rook_sq) = Square::new(from.row(), side.rook_col()) else {
            continue;
        };
        let rook_ready = matches!(
            board.piece_at(rook_sq),
            Some(r) if r.kind == PieceKind::Rook && r.color == c && !r.has_moved
        );
        if !rook_ready {
            continue;
        }

        let (lo, hi) = if from.col() < rook_sq.col() {
            (from.col() + 1, rook_sq.col())
        } else {
            (rook_sq.col() + 1, from.col())
        };
        let path_clear = (lo..hi)
            .filter_map(|col| Square::new(from.row(), col))
            .all(|s| board.piece_at(s).is_none());
        if !path_clear {
            continue;
        }

        let step = side.step();
        let (Some(transit), Some(dest)) = (from.offset(0, step), from.offset(0, 2 * step)) else {
            continue;
        };
        // An unmoved king off its home file could otherwise land on its own rook.
        if board.piece_at(dest).is_some() {
            continue;
        }
        if is_attacked(board, transit, enemy) || is_attacked(board, dest, enemy) {
            continue;
        }
        out.push(Move::castle(from, dest, side));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
