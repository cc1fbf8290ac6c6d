//! End-to-end scenarios on the classic 3x3 board and beyond.

use strictly_mnk::{
    Axis, BoardDimensions, ConfigErrorKind, Game, GameStatus, Player, Position, Rejection,
    Response, WinSettings,
};

fn tictactoe() -> Game {
    Game::new(BoardDimensions::new(3, 3), WinSettings::uniform(3)).expect("valid config")
}

#[test]
fn test_left_column_win_and_time_travel() {
    let mut game = tictactoe();
    for index in [0, 1, 3, 4, 6] {
        assert_eq!(game.place_index(index), Response::Accepted);
    }

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    let runs = game.winning_runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].axis, Axis::Vertical);
    assert_eq!(runs[0].start.to_index(3), 0);
    assert_eq!(runs[0].end.to_index(3), 6);

    assert_eq!(game.jump_to(4), Response::Accepted);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board().rows(), vec!["XO.", "XO.", "..."]);
    assert_eq!(game.move_count(), 5);
}

#[test]
fn test_place_at_tip_after_win_is_noop() {
    let mut game = tictactoe();
    for index in [0, 1, 3, 4, 6] {
        game.place_index(index);
    }
    let board = game.board().clone();

    game.place_index(7);

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.move_count(), 5);
    assert_eq!(game.active_step(), 5);
    assert_eq!(*game.board(), board);
}

#[test]
fn test_draw_after_nine_moves() {
    let mut game = tictactoe();
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.place_index(index);
        if game.move_count() < 9 {
            assert_eq!(game.status(), GameStatus::InProgress);
        }
    }
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut game = tictactoe();
    game.place_index(4);
    game.place_index(0);
    let moves = game.log().moves().to_vec();
    let board = game.board().clone();

    let response = game.place(Position::new(1, 1));

    assert_eq!(
        response,
        Response::Rejected(Rejection::CellOccupied(Position::new(1, 1)))
    );
    assert_eq!(game.log().moves(), moves.as_slice());
    assert_eq!(game.active_step(), 2);
    assert_eq!(*game.board(), board);
}

#[test]
fn test_cell_freed_by_rewind_can_be_replayed() {
    let mut game = tictactoe();
    for index in [4, 0, 8] {
        game.place_index(index);
    }
    game.jump_to(1);
    assert!(game.place_index(8).is_accepted());
    assert_eq!(game.move_count(), 2);
    // Index 1 is O's move now.
    assert_eq!(game.board().occupant(Position::new(2, 2)), Some(Player::O));
}

#[test]
fn test_jump_out_of_range_is_noop() {
    let mut game = tictactoe();
    game.place_index(4);
    assert_eq!(
        game.jump_to(2),
        Response::Rejected(Rejection::StepOutOfRange {
            requested: 2,
            move_count: 1
        })
    );
    assert_eq!(game.active_step(), 1);
}

#[test]
fn test_jump_to_current_step_is_noop() {
    let mut game = tictactoe();
    for index in [4, 0, 8] {
        game.place_index(index);
    }
    game.jump_to(2);
    let before = game.snapshot();
    game.jump_to(game.active_step());
    assert_eq!(game.snapshot(), before);
}

// Exact-length policy: an overlong run does not win, an exact run does.
#[test]
fn test_run_longer_than_required_does_not_win() {
    let mut game =
        Game::new(BoardDimensions::new(6, 6), WinSettings::uniform(3)).expect("valid config");
    // X: 0, 1, 3, 4 in row 0; joining with 2 makes a run of five.
    for index in [0, 30, 1, 31, 3, 33, 4, 34] {
        game.place_index(index);
    }
    assert_eq!(game.status(), GameStatus::InProgress);
    game.place_index(2);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.winning_runs().is_empty());

    let mut game =
        Game::new(BoardDimensions::new(6, 6), WinSettings::uniform(3)).expect("valid config");
    for index in [0, 30, 1, 31, 2] {
        game.place_index(index);
    }
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_independent_axis_lengths() {
    // Two across wins, but columns need four.
    let settings = WinSettings::new(2, 4, 4);
    let mut game = Game::new(BoardDimensions::new(4, 4), settings).expect("valid config");
    for index in [0, 3, 4, 7, 8] {
        game.place_index(index);
    }
    // X has 0, 4, 8: three down, not enough.
    assert_eq!(game.status(), GameStatus::InProgress);
    game.place_index(11);
    // O has 3, 7, 11: three down, not enough either.
    assert_eq!(game.status(), GameStatus::InProgress);
    game.place_index(9);
    // X 8, 9 across.
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_runs()[0].axis, Axis::Horizontal);
}

#[test]
fn test_multiple_axes_reported_together() {
    let mut game = tictactoe();
    // X: 0, 2, 6, 8 corners, O: 1, 3, 5, 7 edges, X takes the center last.
    for index in [0, 1, 2, 3, 6, 5, 8, 7] {
        game.place_index(index);
    }
    assert_eq!(game.status(), GameStatus::InProgress);
    game.place_index(4);
    let axes: Vec<Axis> = game.winning_runs().iter().map(|r| r.axis).collect();
    assert_eq!(axes, vec![Axis::Diagonal, Axis::AntiDiagonal]);
}

#[test]
fn test_config_acceptance_matches_dimensions() {
    for width in 1..=5 {
        for height in 1..=5 {
            for length in 1..=6 {
                let result = Game::new(
                    BoardDimensions::new(width, height),
                    WinSettings::uniform(length),
                );
                if length <= width.min(height) {
                    assert!(result.is_ok(), "{width}x{height} with {length}");
                } else {
                    let err = result.expect_err("should be rejected");
                    assert!(matches!(
                        err.kind,
                        ConfigErrorKind::WinLengthExceedsBoard { .. }
                    ));
                }
            }
        }
    }
}

#[test]
fn test_anti_diagonal_override_is_ignored() {
    let settings = WinSettings::new(3, 3, 3).with_anti_diagonal(9);
    let game = Game::new(BoardDimensions::new(3, 3), settings).expect("anti-diagonal ignored");
    assert_eq!(game.requirements().required(Axis::AntiDiagonal), 3);
}
