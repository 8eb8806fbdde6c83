//! Plain-text board rendering for the terminal

use chess_core::{Board, Color, Move, PieceKind, Square};

fn glyph(kind: PieceKind, color: Color) -> char {
    match (color, kind) {
        (Color::Light, PieceKind::King) => '♔',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Dark, PieceKind::King) => '♚',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Pawn) => '♟',
    }
}

/// Draws the board with rank 8 on top.
///
/// Squares of `highlight` (a selected piece's destinations) are marked with
/// `*` when empty and wrapped in parentheses when they hold a piece to
/// capture. The last move's squares are bracketed.
pub fn render_board(board: &Board, last_move: Option<Move>, highlight: &[Square]) -> String {
    let mut out = String::new();
    for row in 0..8u8 {
        out.push_str(&format!("{} ", 8 - row));
        for col in 0..8u8 {
            let Some(sq) = Square::new(row, col) else {
                continue;
            };
            let in_last = last_move.is_some_and(|m| m.from == sq || m.to == sq);
            let target = highlight.contains(&sq);
            let piece = board.piece_at(sq);
            let cell = match piece {
                Some(pc) => glyph(pc.kind, pc.color),
                None if target => '*',
                None if (row + col) % 2 == 0 => '.',
                None => ' ',
            };
            // Capture targets win over the last-move brackets
            if target && piece.is_some() {
                out.push_str(&format!("({cell})"));
            } else if in_last {
                out.push_str(&format!("[{cell}]"));
            } else {
                out.push_str(&format!(" {cell} "));
            }
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_startpos() {
        let text = render_board(&Board::startpos(), None, &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("8 "));
        assert!(lines[0].contains('♚'));
        assert!(lines[7].contains('♔'));
        assert!(lines[8].contains("a  b"));
    }

    #[test]
    fn test_render_marks_last_move_and_targets() {
        let e2 = Square::from_coord("e2").unwrap();
        let e4 = Square::from_coord("e4").unwrap();
        let e3 = Square::from_coord("e3").unwrap();
        let board = Board::startpos().after(Move::new(e2, e4));
        let text = render_board(&board, Some(Move::new(e2, e4)), &[e3]);
        assert!(text.contains("[♙]"));
        assert!(text.contains('*'));
    }

    #[test]
    fn test_render_marks_capture_targets() {
        let at = |c: &str| Square::from_coord(c).unwrap();
        let mut board = Board::empty();
        board.put(at("e1"), PieceKind::King, Color::Light);
        board.put(at("d1"), PieceKind::Rook, Color::Light);
        board.put(at("d5"), PieceKind::Knight, Color::Dark);
        board.put(at("e8"), PieceKind::King, Color::Dark);

        let text = render_board(&board, None, &[at("d4"), at("d5")]);
        let lines: Vec<&str> = text.lines().collect();
        // Rank 5 is the fourth line, rank 4 the fifth
        assert!(lines[3].contains("(♞)"));
        assert!(lines[4].contains(" * "));
        assert!(!text.contains("(♔)"));
    }
}
