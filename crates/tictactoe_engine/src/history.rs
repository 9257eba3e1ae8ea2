//! Snapshot history with a movable cursor.

use crate::error::HistoryError;
use crate::types::BoardState;
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered snapshots of one game plus the step currently shown.
///
/// `snapshots[0]` is always the empty board. Jumping back never discards
/// anything; only appending while behind the tip drops the abandoned future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryLog {
    snapshots: Vec<BoardState>,
    current_step: usize,
}

impl HistoryLog {
    /// Starts a history holding only the empty board.
    #[instrument]
    pub fn new(board_size: usize) -> Self {
        Self {
            snapshots: vec![BoardState::empty(board_size)],
            current_step: 0,
        }
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &BoardState {
        &self.snapshots[self.current_step]
    }

    /// Index of the snapshot at the cursor.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[BoardState] {
        &self.snapshots
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&BoardState> {
        self.snapshots.get(step)
    }

    /// Number of snapshots, including the initial board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when the cursor is behind the newest snapshot.
    pub fn is_time_traveling(&self) -> bool {
        self.current_step + 1 < self.snapshots.len()
    }

    /// Truncates everything after the cursor, then appends `state` and moves
    /// the cursor onto it.
    ///
    /// The caller guarantees `state` is a one-move successor of `current()`.
    #[instrument(skip(self, state), fields(step = self.current_step, last_move = ?state.last_move()))]
    pub fn append(&mut self, state: BoardState) {
        let keep = self.current_step + 1;
        let discarded = self.snapshots.len().saturating_sub(keep);
        if discarded > 0 {
            debug!(discarded, "Branching: dropping future snapshots");
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(state);
        self.current_step = self.snapshots.len() - 1;
    }

    /// Moves the cursor to `step` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` has no snapshot.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }
        self.current_step = step;
        Ok(())
    }

    /// Discards everything and starts over with an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self, board_size: usize) {
        *self = Self::new(board_size);
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<BoardState> {
        &mut self.snapshots
    }
}
