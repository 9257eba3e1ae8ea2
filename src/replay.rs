//! Headless replay: apply moves and print the resulting game.

use anyhow::Result;
use std::io::Write;
use tictactoe_engine::{GameController, MoveOutcome};
use tracing::{info, instrument, warn};

use crate::config::GameConfig;

/// Plays `cells` in order on a fresh game and writes the history list, the
/// shown board and the status to `out`.
///
/// Ignored moves are reported and skipped, the same way a redundant click is.
#[instrument(skip(config, out), fields(board_size = config.board_size()))]
pub fn run_replay(config: &GameConfig, cells: &[usize], out: &mut impl Write) -> Result<GameController> {
    let mut game = GameController::with_settings(*config.board_size(), *config.history_order())?;

    for &cell in cells {
        if let MoveOutcome::Ignored(reason) = game.apply_move(cell) {
            warn!(cell, %reason, "Replay move ignored");
            writeln!(out, "Move at cell {} ignored: {}", cell, reason)?;
        }
    }
    info!(moves = game.current_step(), "Replay finished");

    for entry in game.history_entries() {
        writeln!(out, "{}", entry.descriptor)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", game.current())?;
    writeln!(out)?;
    writeln!(out, "{}", game.status())?;

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(cells: &[usize]) -> String {
        let mut out = Vec::new();
        run_replay(&GameConfig::default(), cells, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_replay_prints_history_board_and_status() {
        let output = replay(&[0, 4, 1, 5, 2]);
        let expected = "\
Go to game start
Go to move #1 (1/1)
Go to move #2 (2/2)
Go to move #3 (2/1)
Go to move #4 (3/2)
Go to move #5 (3/1)

X|X|X
-+-+-
 |O|O
-+-+-
 | | 

Winner: X
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_replay_reports_ignored_moves() {
        let output = replay(&[4, 4, 12]);
        assert!(output.contains("Move at cell 4 ignored: cell is occupied"));
        assert!(output.contains("Move at cell 12 ignored: cell is off the board"));
        assert!(output.ends_with("Next player: O\n"));
    }
}
