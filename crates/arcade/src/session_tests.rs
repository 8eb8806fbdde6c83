use super::*;
use chess_core::{CastleSide, PieceKind};

fn at(coord: &str) -> Square {
    Square::from_coord(coord).unwrap()
}

fn seeded_bots() -> Bots {
    Bots::from_config(&BotConfig {
        seed: Some(1),
        ..Default::default()
    })
}

fn mated_light() -> GameState {
    let mut b = Board::empty();
    b.put(at("h1"), PieceKind::King, Color::Light);
    b.put(at("g2"), PieceKind::Pawn, Color::Light);
    b.put(at("h2"), PieceKind::Pawn, Color::Light);
    b.put(at("a1"), PieceKind::Rook, Color::Dark);
    b.put(at("a8"), PieceKind::King, Color::Dark);
    GameState::from_board(b, Color::Light)
}

#[test]
fn test_initialize_game() {
    let mut session = GameSession::new(seeded_bots());
    session.apply_move(at("e2"), at("e4")).unwrap();
    session.initialize_game();
    assert_eq!(session.turn(), Color::Light);
    assert!(session.state().history.is_empty());
    assert_eq!(*session.board(), Board::startpos());
}

#[test]
fn test_legal_moves_for() {
    let session = GameSession::new(seeded_bots());
    let knight: Vec<Square> = session
        .legal_moves_for(at("g1"))
        .into_iter()
        .map(|m| m.to)
        .collect();
    assert_eq!(knight.len(), 2);
    assert!(knight.contains(&at("f3")));
    assert!(knight.contains(&at("h3")));

    assert!(session.legal_moves_for(at("e4")).is_empty());
    // Not the side to move, still answered
    assert_eq!(session.legal_moves_for(at("b8")).len(), 2);
}

#[test]
fn test_apply_move_returns_notation_and_status() {
    let mut session = GameSession::new(seeded_bots());
    let applied = session.apply_move(at("e2"), at("e4")).unwrap();
    assert_eq!(applied.notation, "P e2-e4");
    assert_eq!(applied.status, GameStatus::Normal);
    assert_eq!(session.turn(), Color::Dark);
    assert_eq!(session.state().last_move, Some(Move::new(at("e2"), at("e4"))));
}

#[test]
fn test_apply_move_recovers_castle_tag() {
    let mut b = Board::empty();
    b.put(at("e1"), PieceKind::King, Color::Light);
    b.put(at("h1"), PieceKind::Rook, Color::Light);
    b.put(at("e8"), PieceKind::King, Color::Dark);
    let mut session = GameSession::from_state(GameState::from_board(b, Color::Light), seeded_bots());

    let applied = session.apply_move(at("e1"), at("g1")).unwrap();
    assert_eq!(applied.mv.castle, Some(CastleSide::Kingside));
    assert_eq!(applied.notation, "O-O");
    assert_eq!(session.board().piece_at(at("f1")).unwrap().kind, PieceKind::Rook);
}

#[test]
fn test_apply_move_from_empty_square() {
    let mut session = GameSession::new(seeded_bots());
    let err = session.apply_move(at("e4"), at("e5")).unwrap_err();
    assert_eq!(err, SessionError::EmptySquare(at("e4")));
    assert_eq!(session.turn(), Color::Light);
}

#[test]
fn test_bot_move_each_tier() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        let mut session = GameSession::new(seeded_bots());
        session.apply_move(at("e2"), at("e4")).unwrap();
        let before = *session.board();
        let legal = all_legal_moves(&before, Color::Dark);

        let applied = session.request_bot_move(Color::Dark, difficulty).unwrap();
        assert!(legal.contains(&applied.mv), "{difficulty}: {}", applied.mv);
        assert!(applied.notation.starts_with("..."));
        assert_eq!(session.turn(), Color::Light);
        assert_eq!(session.state().history.len(), 2);
    }
}

#[test]
fn test_medium_bot_takes_free_queen() {
    let mut b = Board::empty();
    b.put(at("e1"), PieceKind::King, Color::Light);
    b.put(at("d4"), PieceKind::Queen, Color::Light);
    b.put(at("e8"), PieceKind::King, Color::Dark);
    b.put(at("c6"), PieceKind::Knight, Color::Dark);
    let mut session = GameSession::from_state(GameState::from_board(b, Color::Dark), seeded_bots());

    let applied = session.request_bot_move(Color::Dark, Difficulty::Medium).unwrap();
    assert_eq!(applied.mv, Move::new(at("c6"), at("d4")));
    assert_eq!(applied.notation, "...N c6-d4");
}

#[test]
fn test_bot_refuses_after_game_over() {
    let mut session = GameSession::from_state(mated_light(), seeded_bots());
    assert_eq!(session.status(), GameStatus::Checkmate);
    let err = session
        .request_bot_move(Color::Light, Difficulty::Medium)
        .unwrap_err();
    assert_eq!(err, SessionError::GameOver(GameStatus::Checkmate));
    assert!(session.state().history.is_empty());
}

#[test]
fn test_out_of_turn_bot_without_moves() {
    // Light is mated but the turn says Dark
    let mated = mated_light();
    let state = GameState::from_board(mated.board, Color::Dark);
    let mut session = GameSession::from_state(state, seeded_bots());
    assert_eq!(session.status(), GameStatus::Normal);

    let err = session
        .request_bot_move(Color::Light, Difficulty::Easy)
        .unwrap_err();
    assert_eq!(err, SessionError::GameOver(GameStatus::Checkmate));
    assert_eq!(err.to_string(), "game is over: Checkmate");
    assert!(session.state().history.is_empty());
}

#[test]
fn test_choose_move_without_moves() {
    let state = mated_light();
    let mut bots = seeded_bots();
    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        assert!(choose_move(&state.board, Color::Light, difficulty, &mut bots).is_none());
    }
}

#[test]
fn test_difficulty_from_str() {
    assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
    assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
    assert!("hard".parse::<Difficulty>().is_err());
}
