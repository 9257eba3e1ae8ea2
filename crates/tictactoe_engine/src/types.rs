//! Core domain types: marks and board snapshots.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Content of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Player X (moves first).
    #[serde(rename = "X")]
    PlayerX,
    /// Player O.
    #[serde(rename = "O")]
    PlayerO,
}

impl Mark {
    /// Returns the other player. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerX => Mark::PlayerO,
            Mark::PlayerO => Mark::PlayerX,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `PlayerX` and `PlayerO`.
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }

    /// Mark that plays the move leading to snapshot `step + 1`.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::PlayerX } else { Mark::PlayerO }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::PlayerX => write!(f, "X"),
            Mark::PlayerO => write!(f, "O"),
        }
    }
}

/// One immutable snapshot of the board.
///
/// Cells are stored row-major; a board of side `n` has `n * n` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    cells: Vec<Mark>,
    last_move: Option<usize>,
}

impl BoardState {
    /// Creates the empty board of side `board_size` with no last move.
    #[instrument]
    pub fn empty(board_size: usize) -> Self {
        Self {
            cells: vec![Mark::Empty; board_size * board_size],
            last_move: None,
        }
    }

    /// Builds a snapshot from raw parts.
    pub fn from_parts(cells: Vec<Mark>, last_move: Option<usize>) -> Self {
        Self { cells, last_move }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Index of the cell filled to reach this snapshot.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Side length derived from the cell count.
    pub fn side(&self) -> usize {
        self.cells.len().isqrt()
    }

    /// Mark at `index`, or `None` when out of bounds.
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// True when `index` is on the board and unoccupied.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.mark_at(index), Some(Mark::Empty))
    }

    /// Number of cells holding a player mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|m| m.is_player()).count()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| m.is_player())
    }

    /// Returns the successor snapshot with `mark` placed at `index`.
    ///
    /// Returns `None` if the cell is out of bounds or already taken, so a
    /// successor always differs from `self` by exactly one `Empty` to player
    /// transition.
    #[instrument(skip(self))]
    pub fn with_move(&self, index: usize, mark: Mark) -> Option<Self> {
        if !mark.is_player() || !self.is_empty_at(index) {
            return None;
        }
        let mut cells = self.cells.clone();
        cells[index] = mark;
        Some(Self {
            cells,
            last_move: Some(index),
        })
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.side();
        if side == 0 {
            return Ok(());
        }
        let rule = vec!["-"; side].join("+");
        for (row, chunk) in self.cells.chunks(side).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", rule)?;
            }
            let line = chunk
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_square_cell_count() {
        let board = BoardState::empty(4);
        assert_eq!(board.cells().len(), 16);
        assert_eq!(board.side(), 4);
        assert_eq!(board.last_move(), None);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_with_move_fills_exactly_one_cell() {
        let board = BoardState::empty(3);
        let next = board.with_move(4, Mark::PlayerX).expect("center is free");

        assert_eq!(next.mark_at(4), Some(Mark::PlayerX));
        assert_eq!(next.last_move(), Some(4));
        assert_eq!(next.occupied_count(), 1);
        // Predecessor is untouched.
        assert!(board.is_empty_at(4));
    }

    #[test]
    fn test_with_move_rejects_occupied_and_out_of_bounds() {
        let board = BoardState::empty(3).with_move(0, Mark::PlayerX).unwrap();
        assert!(board.with_move(0, Mark::PlayerO).is_none());
        assert!(board.with_move(9, Mark::PlayerO).is_none());
        assert!(board.with_move(1, Mark::Empty).is_none());
    }

    #[test]
    fn test_display_renders_rows() {
        let board = BoardState::from_parts(
            vec![
                Mark::PlayerX, Mark::Empty, Mark::PlayerO,
                Mark::Empty, Mark::PlayerX, Mark::Empty,
                Mark::Empty, Mark::Empty, Mark::PlayerO,
            ],
            Some(8),
        );
        assert_eq!(board.to_string(), "X| |O\n-+-+-\n |X| \n-+-+-\n | |O");
    }

    #[test]
    fn test_mark_for_step_alternates() {
        assert_eq!(Mark::for_step(0), Mark::PlayerX);
        assert_eq!(Mark::for_step(1), Mark::PlayerO);
        assert_eq!(Mark::for_step(2), Mark::PlayerX);
        assert_eq!(Mark::PlayerX.opponent(), Mark::PlayerO);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    }
}
