//! Single-step invariant: consecutive snapshots differ by one placed mark.

use super::Invariant;
use crate::history::HistoryLog;
use crate::types::{BoardState, Mark};

/// Invariant: each snapshot fills exactly one previously empty cell, and that
/// cell is the one recorded as its last move.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    /// True when `next` is a one-move successor of `prev`.
    pub fn is_successor(prev: &BoardState, next: &BoardState) -> bool {
        if prev.cells().len() != next.cells().len() {
            return false;
        }

        let changed: Vec<usize> = prev
            .cells()
            .iter()
            .zip(next.cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();

        match changed.as_slice() {
            [cell] => {
                prev.mark_at(*cell) == Some(Mark::Empty)
                    && next.mark_at(*cell).is_some_and(Mark::is_player)
                    && next.last_move() == Some(*cell)
            }
            _ => false,
        }
    }
}

impl Invariant<HistoryLog> for SingleStepInvariant {
    fn holds(log: &HistoryLog) -> bool {
        log.snapshots()
            .windows(2)
            .all(|pair| Self::is_successor(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark on an empty cell"
    }
}
