//! Tests for the move/history flow of the game controller.

use xox_core::{Game, GameMode, Mark, MoveError, Outcome, Position, Square, evaluate};

fn play(game: &mut Game, indices: &[usize]) {
    for &i in indices {
        let pos = Position::from_index(i).expect("index in range");
        game.apply_move(pos).expect("legal move");
    }
}

#[test]
fn test_first_move_scenario() {
    let mut game = Game::new();
    game.select_mode(GameMode::TwoPlayer);

    game.apply_move(Position::TopLeft).unwrap();

    assert_eq!(game.board().get(Position::TopLeft), Square::Taken(Mark::X));
    for pos in Position::ALL.into_iter().skip(1) {
        assert!(game.board().is_empty(pos));
    }
    assert_eq!(game.cursor(), 1);
    assert_eq!(game.outcome(), Outcome::Open);
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = Game::new();
    game.select_mode(GameMode::TwoPlayer);

    // X takes the top row, O answers in the middle row.
    play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(
        game.outcome(),
        Outcome::Won {
            mark: Mark::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert!(!game.accepts_input());
}

#[test]
fn test_draw_scenario() {
    let mut game = Game::new();
    game.select_mode(GameMode::TwoPlayer);

    play(&mut game, &[0, 4, 1, 2, 6, 3, 5, 7, 8]);

    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(game.board().is_full());
}

#[test]
fn test_moves_rejected_after_win() {
    let mut game = Game::new();
    game.select_mode(GameMode::TwoPlayer);
    play(&mut game, &[0, 3, 1, 4, 2]);

    let before = game.clone();
    assert_eq!(
        game.apply_move(Position::BottomRight),
        Err(MoveError::GameOver)
    );
    assert_eq!(game, before);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_each_move_changes_exactly_one_square() {
    let mut game = Game::new();
    game.select_mode(GameMode::TwoPlayer);
    play(&mut game, &[4, 0, 8, 2, 6]);

    for pair in game.history().windows(2) {
        let changed: Vec<_> = Position::ALL
            .into_iter()
            .filter(|&pos| pair[0].get(pos) != pair[1].get(pos))
            .collect();
        assert_eq!(changed.len(), 1);
        assert!(pair[0].is_empty(changed[0]));
        assert!(!pair[1].is_empty(changed[0]));
    }
}

#[test]
fn test_kth_move_alternates_marks() {
    let mut game = Game::new();
    game.select_mode(GameMode::TwoPlayer);
    let indices = [4, 0, 8, 2, 6, 1];
    play(&mut game, &indices);

    for (k, &i) in indices.iter().enumerate() {
        let pos = Position::from_index(i).unwrap();
        let expected = if k % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.board().get(pos), Square::Taken(expected));
    }
}

#[test]
fn test_rewind_discards_redo_branch_on_move() {
    let mut game = Game::new();
    game.select_mode(GameMode::TwoPlayer);
    play(&mut game, &[0, 4, 8]);
    assert_eq!(game.history().len(), 4);

    game.jump_to(2).unwrap();
    game.apply_move(Position::TopRight).unwrap();

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.cursor(), 3);
    assert!(game.board().is_empty(Position::BottomRight));
    assert_eq!(game.board().get(Position::TopRight), Square::Taken(Mark::X));
}

#[test]
fn test_evaluate_accepts_malformed_boards() {
    use xox_core::Board;

    // All nine squares X - unreachable in legal play, still evaluated
    // by fixed line order.
    let mut board = Board::new();
    for pos in Position::ALL {
        board.set(pos, Square::Taken(Mark::X));
    }
    assert_eq!(
        evaluate(&board),
        Outcome::Won {
            mark: Mark::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
}
