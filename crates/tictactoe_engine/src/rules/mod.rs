//! Game rules for tic-tac-toe.
//!
//! Pure functions over a flattened board and its side length. Rules are kept
//! apart from history storage so the controller and the views can evaluate
//! any snapshot without owning it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{find_winner, lines};

use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinResult {
    /// Game is still open.
    NoResult,
    /// A line is uniformly filled by `player`.
    Win {
        /// The winning mark.
        player: Mark,
        /// Cell indices of the winning line.
        line: Vec<usize>,
    },
    /// Board is full and nobody has a line.
    Draw,
}

impl WinResult {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WinResult::NoResult)
    }

    /// Winning line cells, empty unless this is a win.
    pub fn winning_line(&self) -> &[usize] {
        match self {
            WinResult::Win { line, .. } => line,
            _ => &[],
        }
    }
}

/// Evaluates `cells` as a board of side `board_size`.
///
/// The first winning line in priority order wins. A board whose cell count
/// does not match `board_size` squared never produces a result.
#[instrument(skip(cells), fields(cells = cells.len()))]
pub fn evaluate(cells: &[Mark], board_size: usize) -> WinResult {
    if board_size == 0 || cells.len() != board_size * board_size {
        tracing::warn!(board_size, "Cell count does not match board size");
        return WinResult::NoResult;
    }

    if let Some((player, line)) = find_winner(cells, board_size) {
        return WinResult::Win { player, line };
    }

    if is_full(cells) {
        return WinResult::Draw;
    }

    WinResult::NoResult
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, PlayerO as O, PlayerX as X};

    #[test]
    fn test_empty_board_has_no_result() {
        assert_eq!(evaluate(&[E; 9], 3), WinResult::NoResult);
    }

    #[test]
    fn test_top_row_win_reports_line() {
        let cells = [X, X, X, O, O, E, E, E, E];
        assert_eq!(
            evaluate(&cells, 3),
            WinResult::Win { player: X, line: vec![0, 1, 2] }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O O X / X X O
        let cells = [X, O, X, O, O, X, X, X, O];
        assert_eq!(evaluate(&cells, 3), WinResult::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X X X / O O X / X O O
        let cells = [X, X, X, O, O, X, X, O, O];
        assert!(matches!(evaluate(&cells, 3), WinResult::Win { player: X, .. }));
    }

    #[test]
    fn test_simultaneous_lines_pick_first_in_order() {
        // X wins both the top row and the left column.
        let cells = [X, X, X, X, O, O, X, O, O];
        assert_eq!(evaluate(&cells, 3).winning_line(), &[0, 1, 2]);
    }

    #[test]
    fn test_mismatched_cell_count_is_no_result() {
        let cells = [X, X, X, E, E, E, E, E, E];
        assert_eq!(evaluate(&cells, 4), WinResult::NoResult);
    }

    #[test]
    fn test_four_by_four_needs_full_line() {
        let mut cells = [E; 16];
        cells[0] = X;
        cells[1] = X;
        cells[2] = X;
        assert_eq!(evaluate(&cells, 4), WinResult::NoResult);

        cells[3] = X;
        assert_eq!(evaluate(&cells, 4).winning_line(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_single_cell_board() {
        assert_eq!(evaluate(&[E], 1), WinResult::NoResult);
        assert_eq!(
            evaluate(&[O], 1),
            WinResult::Win { player: O, line: vec![0] }
        );
    }
}
