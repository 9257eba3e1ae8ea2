//! Tests for the headless replay command.

use tictactoe_engine::{GameStatus, HistoryOrder};
use tictactoe_timeline::{GameConfig, run_replay};

#[test]
fn test_replay_draw() {
    let mut out = Vec::new();
    let game = run_replay(&GameConfig::default(), &[0, 2, 1, 3, 5, 4, 6, 7, 8], &mut out).unwrap();
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(String::from_utf8(out).unwrap().ends_with("DRAW\n"));
}

#[test]
fn test_replay_descending_lists_latest_first() {
    let config = GameConfig::default()
        .with_overrides(None, Some(HistoryOrder::Descending))
        .unwrap();
    let mut out = Vec::new();
    run_replay(&config, &[4, 0], &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().take(3).collect();
    assert_eq!(
        lines,
        vec!["Go to move #2 (1/1)", "Go to move #1 (2/2)", "Go to game start"]
    );
}

#[test]
fn test_replay_on_larger_board() {
    let config = GameConfig::default().with_overrides(Some(4), None).unwrap();
    let mut out = Vec::new();
    let game = run_replay(&config, &[0, 1, 5, 2, 10, 3, 15], &mut out).unwrap();
    assert_eq!(game.winning_line(), vec![0, 5, 10, 15]);
}
