//! Cursor invariant: the current step points at an existing snapshot.

use super::Invariant;
use crate::history::HistoryLog;

/// Invariant: `current_step < len(snapshots)`.
pub struct CursorInRangeInvariant;

impl Invariant<HistoryLog> for CursorInRangeInvariant {
    fn holds(log: &HistoryLog) -> bool {
        log.current_step() < log.len()
    }

    fn description() -> &'static str {
        "Current step points at an existing snapshot"
    }
}
