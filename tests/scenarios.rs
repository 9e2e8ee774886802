use std::time::{Duration, Instant};

use gomoku::{
    choose_move, Difficulty, GameConfig, GameError, GameSession, GameStatus, Pos, Stone,
    TurnController,
};

/// Black builds row 7 from column 3 while White answers on row 0
fn black_four_on_row_seven() -> TurnController {
    let mut game = TurnController::new();
    for col in 3..7 {
        game.apply_move(Pos::new(7, col)).unwrap();
        game.apply_move(Pos::new(0, col * 2)).unwrap();
    }
    game
}

#[test]
fn horizontal_five_wins_with_line() {
    let mut game = black_four_on_row_seven();
    assert_eq!(game.apply_move(Pos::new(7, 7)), Ok(GameStatus::Won(Stone::Black)));

    let state = game.state();
    assert!(state.is_over());
    assert_eq!(state.winner(), Some(Stone::Black));
    let expected: Vec<Pos> = (3..=7).map(|c| Pos::new(7, c)).collect();
    assert_eq!(state.winning_line(), Some(expected.as_slice()));
}

#[test]
fn undo_after_win_resumes_play() {
    let mut game = black_four_on_row_seven();
    game.apply_move(Pos::new(7, 7)).unwrap();
    game.undo().unwrap();

    let state = game.state();
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.current_player(), Stone::Black);
    assert!(state.board().is_empty(Pos::new(7, 7)));
    assert!(state.winning_line().is_none());
}

#[test]
fn move_after_game_over_is_rejected() {
    let mut game = black_four_on_row_seven();
    game.apply_move(Pos::new(7, 7)).unwrap();
    let before = game.state().clone();

    assert_eq!(
        game.apply_move(Pos::new(12, 12)),
        Err(GameError::IllegalMove { row: 12, col: 12 })
    );
    assert_eq!(game.state(), &before);
}

fn striped(pos: Pos) -> Stone {
    if ((pos.col as usize + 2 * pos.row as usize) / 2) % 2 == 0 {
        Stone::Black
    } else {
        Stone::White
    }
}

#[test]
fn full_board_without_five_is_draw() {
    let mut game = TurnController::new();
    let positions: Vec<Pos> = game.state().board().positions().collect();
    let black: Vec<Pos> = positions.iter().copied().filter(|&p| striped(p) == Stone::Black).collect();
    let white: Vec<Pos> = positions.iter().copied().filter(|&p| striped(p) == Stone::White).collect();
    assert_eq!(black.len(), white.len() + 1);

    for (i, &pos) in black.iter().enumerate() {
        let status = game.apply_move(pos).unwrap();
        if let Some(&reply) = white.get(i) {
            assert_eq!(status, GameStatus::InProgress);
            assert_eq!(game.apply_move(reply), Ok(GameStatus::InProgress));
        } else {
            assert_eq!(status, GameStatus::Draw);
        }
    }

    let state = game.state();
    assert!(state.board().is_full());
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.winner(), None);
    assert!(matches!(game.apply_move(Pos::new(0, 0)), Err(GameError::IllegalMove { .. })));

    // Taking back the last stone reopens the game
    game.undo().unwrap();
    assert_eq!(game.state().status(), GameStatus::InProgress);
    game.redo().unwrap();
    assert_eq!(game.state().status(), GameStatus::Draw);
}

#[test]
fn computer_plays_a_whole_game() {
    let now = Instant::now();
    let mut config = GameConfig::default();
    config.board_size = 9;
    config.opponent.difficulty = Difficulty::Hard;
    let mut session = GameSession::new(config, now).unwrap();

    // The human always takes the first empty intersection
    let mut clock = now;
    while !session.state().is_over() {
        let first_empty = session
            .state()
            .board()
            .positions()
            .find(|&p| session.state().board().is_empty(p))
            .unwrap();
        session.submit_move(first_empty, clock).unwrap();
        clock += Duration::from_secs(1);
        session.poll(clock);
    }
    assert!(session.state().status().is_terminal());
}

#[test]
fn opponent_never_picks_occupied_cell() {
    let mut game = TurnController::with_size(7).unwrap();
    while !game.state().is_over() {
        let state = game.state();
        let pos = choose_move(state.board(), state.current_player(), Difficulty::Easy).unwrap();
        assert!(state.board().is_empty(pos));
        game.apply_move(pos).unwrap();
    }
}
