use arbiter_core::{Color, FenError, PieceKind, Square};
use arbiter_game::{Game, GameError, GameStatus, NotationError};

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        game.play_notation(mv)
            .unwrap_or_else(|err| panic!("{mv} rejected: {err}"));
    }
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4"]);
    let outcome = game.play_notation("d8h4").unwrap();
    assert!(outcome.gives_check);
    assert_eq!(
        outcome.status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(game.status().to_string(), "Black wins by checkmate!");
    assert_eq!(game.play_notation("a2a3"), Err(GameError::GameOver));
}

#[test]
fn scholars_mate_for_white() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn stalemate_ends_in_a_draw() {
    let mut game = Game::from_fen("7k/8/8/5Q2/8/8/8/6K1 w - - 0 1").unwrap();
    let outcome = game.play_notation("f5f7").unwrap();
    assert!(!outcome.gives_check);
    assert_eq!(outcome.status, GameStatus::Stalemate);
    assert_eq!(game.status().to_string(), "Draw by stalemate!");
}

#[test]
fn check_is_reported_and_must_be_answered() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "f7f6", "d2d4", "g7g5"]);
    let outcome = game.play_notation("d1h5").unwrap();
    assert!(outcome.gives_check);
    assert_eq!(outcome.status, GameStatus::Checkmate { winner: Color::White });

    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "d7d5"]);
    let outcome = game.play_notation("f1b5").unwrap();
    assert!(outcome.gives_check);
    assert!(game.in_check());
    assert!(matches!(
        game.play_notation("a7a6"),
        Err(GameError::IllegalMove { .. })
    ));
    game.play_notation("c7c6").unwrap();
    let outcome = game.play_notation("e4d5").unwrap();
    assert_eq!(outcome.captured.map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn rejection_reasons() {
    let mut game = Game::new();
    assert!(matches!(
        game.play_notation("e2"),
        Err(GameError::Notation(NotationError::TooShort { .. }))
    ));
    assert!(matches!(
        game.play_notation("x2e4"),
        Err(GameError::Notation(NotationError::InvalidSquare { .. }))
    ));
    assert_eq!(
        game.play_notation("d4d5"),
        Err(GameError::NoPieceAt { square: Square::D4 })
    );
    assert!(matches!(
        game.play_notation("b8c6"),
        Err(GameError::NotYourPiece { .. })
    ));
    assert!(matches!(
        game.play_notation("e1e2"),
        Err(GameError::IllegalMove { .. })
    ));
    assert_eq!(game.side_to_move(), Color::White);
    assert!(game.history().is_empty());
}

#[test]
fn promotion_choice_is_honoured() {
    for (input, kind) in [
        ("b7b8", PieceKind::Queen),
        ("b7-b8q", PieceKind::Queen),
        ("b7b8r", PieceKind::Rook),
        ("B7B8B", PieceKind::Bishop),
        ("b7b8n", PieceKind::Knight),
        ("b7b8z", PieceKind::Queen),
    ] {
        let mut game = Game::from_fen("8/1P5k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let outcome = game.play_notation(input).unwrap();
        assert_eq!(outcome.mv.promotion, Some(kind), "{input}");
        let piece = game.board().piece_at(Square::B8).unwrap();
        assert!(piece.is(Color::White, kind), "{input}");
    }
}

#[test]
fn castling_through_the_controller() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"],
    );
    game.play_notation("e1g1").unwrap();
    let board = game.board();
    assert!(board.piece_at(Square::G1).unwrap().is(Color::White, PieceKind::King));
    assert!(board.piece_at(Square::F1).unwrap().is(Color::White, PieceKind::Rook));
}

#[test]
fn en_passant_through_the_controller() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let outcome = game.play_notation("e5d6").unwrap();
    assert_eq!(outcome.captured.map(|p| p.kind), Some(PieceKind::Pawn));
    assert!(game.board().is_empty(Square::D5));
}

#[test]
fn position_string_tracks_side_to_move() {
    let mut game = Game::new();
    assert_eq!(
        game.position_string(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
    );
    game.play_notation("g1f3").unwrap();
    assert!(game.position_string().ends_with(" b - - 0 1"));
}

#[test]
fn start_position_with_waiting_side_in_check_is_refused() {
    let err = Game::from_fen("QQQQQQQQ/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/kQQQQQQK w - - 0 1").unwrap_err();
    assert_eq!(err, FenError::OpponentInCheck { side: Color::Black });
    assert!("4k3/8/8/8/8/8/8/4K2r b".parse::<Game>().is_err());
}
