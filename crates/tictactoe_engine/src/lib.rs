//! Tic-tac-toe engine with snapshot history and time travel.
//!
//! The engine is framework-free: a [`GameController`] owns a [`HistoryLog`]
//! of [`BoardState`] snapshots and delegates win/draw detection to the pure
//! functions in [`rules`]. Views read snapshots and evaluation results and
//! send intents back through the controller.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameController, GameStatus, Mark};
//!
//! let mut game = GameController::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), GameStatus::WinnerIs(Mark::PlayerX));
//! assert_eq!(game.winning_line(), vec![0, 1, 2]);
//!
//! // Travel back and branch: the abandoned future is dropped.
//! game.jump_to(2).unwrap();
//! game.apply_move(8);
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod history;
pub mod invariants;
pub mod rules;
mod types;

pub use controller::{
    DEFAULT_BOARD_SIZE, GameController, GameStatus, HistoryEntry, HistoryOrder, IgnoredReason,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE, MoveDescriptor, MoveOutcome,
};
pub use error::{BoardSizeError, HistoryError};
pub use history::HistoryLog;
pub use rules::{WinResult, evaluate};
pub use types::{BoardState, Mark};
