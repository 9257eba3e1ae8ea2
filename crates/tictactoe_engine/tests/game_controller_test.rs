//! Behavioral tests for the game controller.

use strum::IntoEnumIterator;
use tictactoe_engine::invariants::{HistoryInvariants, InvariantSet};
use tictactoe_engine::{
    GameController, GameStatus, HistoryOrder, IgnoredReason, Mark, MoveOutcome, WinResult,
};

fn play(cells: &[usize]) -> GameController {
    let mut game = GameController::new();
    for &cell in cells {
        game.apply_move(cell);
    }
    game
}

#[test]
fn test_top_row_win() {
    let game = play(&[0, 4, 1, 5, 2]);
    assert_eq!(game.status(), GameStatus::WinnerIs(Mark::PlayerX));
    assert_eq!(
        game.evaluate(),
        WinResult::Win {
            player: Mark::PlayerX,
            line: vec![0, 1, 2],
        }
    );
    assert_eq!(game.winning_line(), vec![0, 1, 2]);
}

#[test]
fn test_full_board_draw() {
    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7
    let game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.winning_line().is_empty());
}

#[test]
fn test_occupied_cell_is_idempotent_guard() {
    let mut game = play(&[4]);
    assert_eq!(game.apply_move(4), MoveOutcome::Ignored(IgnoredReason::Occupied));
    let after_first = game.clone();

    assert_eq!(game.apply_move(4), MoveOutcome::Ignored(IgnoredReason::Occupied));
    assert_eq!(game.history(), after_first.history());
    assert_eq!(game.next_mark(), after_first.next_mark());
}

#[test]
fn test_jump_then_current_is_snapshot() {
    let mut game = play(&[0, 4, 8, 2]);
    let snapshots = game.history().snapshots().to_vec();
    for (step, snapshot) in snapshots.iter().enumerate() {
        game.jump_to(step).unwrap();
        assert_eq!(game.current(), snapshot);
    }
}

#[test]
fn test_branching_truncates_future() {
    let mut game = play(&[0, 4, 8, 2, 6]);
    let old = game.history().snapshots().to_vec();
    let k = 2;

    game.jump_to(k).unwrap();
    assert!(game.apply_move(7).is_applied());

    assert_eq!(game.history().len(), k + 2);
    assert_eq!(&game.history().snapshots()[..=k], &old[..=k]);
    assert_ne!(game.history().snapshots()[k + 1], old[k + 1]);
    assert_eq!(game.current().last_move(), Some(7));
}

#[test]
fn test_turns_alternate() {
    let mut game = GameController::new();
    for (moves, cell) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        assert_eq!(game.x_is_next(), moves % 2 == 0);
        game.apply_move(cell);
    }
}

#[test]
fn test_time_travel_leaves_won_state() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    game.jump_to(3).unwrap();
    assert_eq!(game.status(), GameStatus::NextPlayerIs(Mark::PlayerO));

    // Moving again from here is allowed and replaces the winning future.
    assert!(game.apply_move(8).is_applied());
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_jump_allowed_after_game_over() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    assert!(game.jump_to(0).is_ok());
    assert!(game.jump_to(5).is_ok());
    assert_eq!(game.status(), GameStatus::WinnerIs(Mark::PlayerX));
}

#[test]
fn test_invariants_hold_through_a_game() {
    let mut game = GameController::new();
    for cell in [4, 0, 8, 2, 1, 7] {
        game.apply_move(cell);
        assert!(HistoryInvariants::check_all(game.history()).is_ok());
    }
    game.jump_to(3).unwrap();
    game.apply_move(6);
    assert!(HistoryInvariants::check_all(game.history()).is_ok());
}

#[test]
fn test_larger_board_game() {
    let mut game = GameController::with_settings(4, HistoryOrder::Ascending).unwrap();
    // X fills the left column, O plays the second column.
    for cell in [0, 1, 4, 5, 8, 9] {
        game.apply_move(cell);
    }
    assert_eq!(game.status(), GameStatus::NextPlayerIs(Mark::PlayerX));

    game.apply_move(12);
    assert_eq!(game.status(), GameStatus::WinnerIs(Mark::PlayerX));
    assert_eq!(game.winning_line(), vec![0, 4, 8, 12]);
    assert_eq!(game.move_descriptor(7).unwrap().position, Some((1, 4)));
}

#[test]
fn test_history_order_does_not_touch_game() {
    let mut game = play(&[0, 4]);
    let before = game.history().clone();
    for order in HistoryOrder::iter() {
        game.set_history_order(order);
        assert_eq!(game.history(), &before);
        assert_eq!(game.history_order(), order);
    }
}

#[test]
fn test_restart_keeps_size() {
    let mut game = GameController::with_settings(5, HistoryOrder::Descending).unwrap();
    game.apply_move(12);
    game.restart();
    assert_eq!(game.board_size(), 5);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history_order(), HistoryOrder::Descending);
}

#[test]
fn test_board_state_serializes_marks_by_symbol() {
    let game = play(&[4]);
    let json = serde_json::to_value(game.current()).unwrap();
    assert_eq!(json["last_move"], 4);
    assert_eq!(json["cells"][4], "X");
    assert_eq!(json["cells"][0], "Empty");
}
