use std::time::Instant;

use rayon::prelude::*;

use chess_core::{all_legal_moves, perft, Board, Color, Piece, PieceKind, Square};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// Builds a board from eight rows of piece letters, rank 8 first.
/// Uppercase is Light, lowercase is Dark, `.` is empty.
fn diagram(rows: [&str; 8], kings_moved: bool) -> Board {
    let mut b = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "row {row} must have 8 squares");
        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("unknown piece letter {other}"),
            };
            let mut pc = Piece::new(kind, color);
            pc.has_moved = kind == PieceKind::King && kings_moved;
            let sq = Square::new(row as u8, col as u8).unwrap();
            b.set_piece(sq, Some(pc));
        }
    }
    b
}

/// Splits the root across threads, one board copy per root move.
fn parallel_perft(board: &Board, color: Color, depth: u8) -> u64 {
    all_legal_moves(board, color)
        .par_iter()
        .map(|&mv| perft(&board.after(mv), color.other(), depth - 1))
        .sum()
}

#[test]
fn perft_startpos_shallow() {
    let b = Board::startpos();
    assert_eq!(perft(&b, Color::Light, 0), 1);
    assert_eq!(perft(&b, Color::Light, 1), 20);
    assert_eq!(perft(&b, Color::Light, 2), 400);
    assert_eq!(perft(&b, Color::Light, 3), 8_902);
}

#[test]
fn perft_startpos_depth_4() {
    let start = Instant::now();
    let nodes = parallel_perft(&Board::startpos(), Color::Light, 4);
    assert_eq!(nodes, 197_281);
    println!("startpos depth 4: {nodes} nodes in {:.3?}", start.elapsed());
}

#[test]
fn perft_kiwipete_depth_1() {
    // Castling on both wings, pins and discovered attacks
    let b = diagram(
        [
            "r...k..r", //
            "p.ppqpb.", //
            "bn..pnp.", //
            "...PN...", //
            ".p..P...", //
            "..N..Q.p", //
            "PPPBBPPP", //
            "R...K..R",
        ],
        false,
    );
    let moves = all_legal_moves(&b, Color::Light);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.castle.is_some()).count(), 2);
}

#[test]
fn perft_middlegame_position() {
    let b = diagram(
        [
            "r....rk.", //
            ".pp.qppp", //
            "p.np.n..", //
            "..b.p.B.", //
            "..B.P.b.", //
            "P.NP.N..", //
            ".PP.QPPP", //
            "R....RK.",
        ],
        true,
    );
    assert_eq!(perft(&b, Color::Light, 1), 46);
    assert_eq!(perft(&b, Color::Light, 2), 2_079);
    if std::env::var(FULL_PERFT_ENV).is_ok() {
        assert_eq!(parallel_perft(&b, Color::Light, 3), 89_890);
    }
}
