//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::history::HistoryLog;
use crate::types::Mark;

/// Invariant: the mark placed to reach snapshot `k` belongs to X for odd `k`
/// and to O for even `k`.
///
/// Turn parity is derived from the step index, so this must hold for
/// `jump_to` to restore the right player.
pub struct AlternatingMarksInvariant;

impl Invariant<HistoryLog> for AlternatingMarksInvariant {
    fn holds(log: &HistoryLog) -> bool {
        log.snapshots().iter().enumerate().skip(1).all(|(step, snapshot)| {
            snapshot
                .last_move()
                .and_then(|cell| snapshot.mark_at(cell))
                .is_some_and(|mark| mark == Mark::for_step(step - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}
