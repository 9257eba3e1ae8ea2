//! Genesis invariant: the first snapshot is the untouched board.

use super::Invariant;
use crate::history::HistoryLog;

/// Invariant: `snapshots[0]` is all empty and has no last move.
pub struct EmptyGenesisInvariant;

impl Invariant<HistoryLog> for EmptyGenesisInvariant {
    fn holds(log: &HistoryLog) -> bool {
        log.get(0)
            .is_some_and(|genesis| genesis.last_move().is_none() && genesis.occupied_count() == 0)
    }

    fn description() -> &'static str {
        "First snapshot is an empty board with no last move"
    }
}
