use super::*;
use chess_core::{all_legal_moves, PieceKind, Square};

#[test]
fn classical_engine_returns_legal_move() {
    let mut engine = ClassicalEngine::new();
    let board = Board::startpos();

    let result = engine.choose_move(&board, Color::Light);

    assert_eq!(result.depth, DEFAULT_DEPTH);
    assert!(result.nodes > 0);
    let mv = result.best_move.expect("start position has moves");
    assert!(all_legal_moves(&board, Color::Light).contains(&mv));
}

#[test]
fn classical_engine_parallel_agrees() {
    let board = Board::startpos();
    let seq = ClassicalEngine::with_depth(2).choose_move(&board, Color::Dark);
    let par = ClassicalEngine::with_depth(2)
        .parallel_root(true)
        .choose_move(&board, Color::Dark);
    assert_eq!(seq.best_move, par.best_move);
    assert_eq!(seq.score, par.score);
}

#[test]
fn classical_engine_handles_checkmate() {
    let at = |c: &str| Square::from_coord(c).unwrap();
    let mut board = Board::empty();
    board.put(at("h1"), PieceKind::King, Color::Light);
    board.put(at("g2"), PieceKind::Pawn, Color::Light);
    board.put(at("h2"), PieceKind::Pawn, Color::Light);
    board.put(at("a1"), PieceKind::Rook, Color::Dark);
    board.put(at("a8"), PieceKind::King, Color::Dark);

    let result = ClassicalEngine::new().choose_move(&board, Color::Light);

    assert!(result.best_move.is_none());
    assert_eq!(result.score, MATE_SCORE);
}
