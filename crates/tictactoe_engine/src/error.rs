//! Error types for the game engine.

use derive_more::{Display, Error};

/// Error returned when navigating the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested step does not exist in the history.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Error returned when reconfiguring the board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardSizeError {
    /// Requested size is outside the supported bounds.
    #[display("Board size {} is out of bounds ({}..={})", requested, min, max)]
    OutOfBounds {
        /// Requested side length.
        requested: usize,
        /// Smallest supported side length.
        min: usize,
        /// Largest supported side length.
        max: usize,
    },
}
