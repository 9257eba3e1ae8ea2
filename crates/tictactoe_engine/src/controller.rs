//! Game controller: the single owner and mutator of a game's state.

use crate::error::{BoardSizeError, HistoryError};
use crate::history::HistoryLog;
use crate::invariants::assert_invariants;
use crate::rules::{self, WinResult};
use crate::types::{BoardState, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Smallest supported board side.
pub const MIN_BOARD_SIZE: usize = 1;
/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 9;
/// Side of the classic board.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Order in which history entries are listed. Display only.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    #[serde(rename = "asc")]
    #[strum(serialize = "asc")]
    Ascending,
    /// Latest move first.
    #[serde(rename = "desc")]
    #[strum(serialize = "desc")]
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Why a move request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredReason {
    /// Cell index is not on the board.
    #[display("cell is off the board")]
    OutOfBounds,
    /// The shown board is already won or drawn.
    #[display("game is over")]
    GameOver,
    /// The cell already holds a mark.
    #[display("cell is occupied")]
    Occupied,
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed; `result` evaluates the new board.
    Applied {
        /// Mark that was placed.
        mark: Mark,
        /// Evaluation of the resulting board.
        result: WinResult,
    },
    /// Nothing changed.
    Ignored(IgnoredReason),
}

impl MoveOutcome {
    /// True if a mark was placed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Status line for the shown board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// Board is full with no winner.
    #[display("DRAW")]
    Draw,
    /// A player owns a full line.
    #[display("Winner: {}", _0)]
    WinnerIs(Mark),
    /// Game continues with this mark to move.
    #[display("Next player: {}", _0)]
    NextPlayerIs(Mark),
}

/// Label data for one history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescriptor {
    /// Snapshot index this entry jumps to.
    pub step: usize,
    /// 1-based `(row, column)` of the move; `None` for the game start.
    pub position: Option<(usize, usize)>,
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            None => write!(f, "Go to game start"),
            Some((row, col)) => write!(f, "Go to move #{} ({}/{})", self.step, row, col),
        }
    }
}

/// One row of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Label data.
    pub descriptor: MoveDescriptor,
    /// True for the shown step while time traveling.
    pub selected: bool,
}

/// Owns one game: its history, board size and history display order.
#[derive(Debug, Clone)]
pub struct GameController {
    board_size: usize,
    history: HistoryLog,
    history_order: HistoryOrder,
}

impl GameController {
    /// Creates a classic 3x3 game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            history: HistoryLog::new(DEFAULT_BOARD_SIZE),
            history_order: HistoryOrder::default(),
        }
    }

    /// Creates a game with the given side and history order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError::OutOfBounds`] if `board_size` is unsupported.
    #[instrument]
    pub fn with_settings(
        board_size: usize,
        history_order: HistoryOrder,
    ) -> Result<Self, BoardSizeError> {
        check_board_size(board_size)?;
        Ok(Self {
            board_size,
            history: HistoryLog::new(board_size),
            history_order,
        })
    }

    /// Board side length.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// History display order.
    pub fn history_order(&self) -> HistoryOrder {
        self.history_order
    }

    /// The full history.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Snapshot currently shown.
    pub fn current(&self) -> &BoardState {
        self.history.current()
    }

    /// Index of the snapshot currently shown.
    pub fn current_step(&self) -> usize {
        self.history.current_step()
    }

    /// True if X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.history.current_step() % 2 == 0
    }

    /// Mark placed by the next move.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.history.current_step())
    }

    /// Evaluates the shown board.
    pub fn evaluate(&self) -> WinResult {
        rules::evaluate(self.current().cells(), self.board_size)
    }

    /// Places the next mark at `cell`.
    ///
    /// Out-of-range cells, occupied cells and finished boards are ignored
    /// without changing any state. Placing while time traveling discards the
    /// snapshots after the shown one.
    #[instrument(skip(self), fields(step = self.current_step(), mark = %self.next_mark()))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        if cell >= self.board_size * self.board_size {
            debug!("Move ignored: out of bounds");
            return MoveOutcome::Ignored(IgnoredReason::OutOfBounds);
        }

        if self.evaluate().is_terminal() {
            debug!("Move ignored: game over");
            return MoveOutcome::Ignored(IgnoredReason::GameOver);
        }

        let mark = self.next_mark();
        let Some(next) = self.current().with_move(cell, mark) else {
            debug!("Move ignored: cell occupied");
            return MoveOutcome::Ignored(IgnoredReason::Occupied);
        };

        self.history.append(next);
        assert_invariants(&self.history);

        let result = self.evaluate();
        info!(?result, step = self.current_step(), "Move applied");
        MoveOutcome::Applied { mark, result }
    }

    /// Shows snapshot `step`; the next mark follows from its parity.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` has no snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        self.history.jump_to(step)?;
        debug!(x_is_next = self.x_is_next(), "Jumped");
        Ok(())
    }

    /// Changes the board side.
    ///
    /// A different size starts a fresh game so every snapshot matches the
    /// board. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError::OutOfBounds`] and keeps the current game if
    /// `board_size` is unsupported.
    #[instrument(skip(self), fields(from = self.board_size))]
    pub fn set_board_size(&mut self, board_size: usize) -> Result<bool, BoardSizeError> {
        check_board_size(board_size)?;
        if board_size == self.board_size {
            return Ok(false);
        }
        self.board_size = board_size;
        self.history.reset(board_size);
        info!(board_size, "Board resized, history reset");
        Ok(true)
    }

    /// Sets the history display order.
    #[instrument(skip(self))]
    pub fn set_history_order(&mut self, order: HistoryOrder) {
        self.history_order = order;
    }

    /// Flips the history display order.
    pub fn toggle_history_order(&mut self) {
        self.set_history_order(self.history_order.toggle());
    }

    /// Starts a new game at the current size.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.reset(self.board_size);
    }

    /// Status of the shown board.
    pub fn status(&self) -> GameStatus {
        match self.evaluate() {
            WinResult::Draw => GameStatus::Draw,
            WinResult::Win { player, .. } => GameStatus::WinnerIs(player),
            WinResult::NoResult => GameStatus::NextPlayerIs(self.next_mark()),
        }
    }

    /// Cells of the winning line on the shown board, empty if none.
    pub fn winning_line(&self) -> Vec<usize> {
        self.evaluate().winning_line().to_vec()
    }

    /// Describes the history entry for `step`.
    ///
    /// The row is `(i + 1) % n` (with `0` read as `n`) and the column is
    /// `ceil((i + 1) / n)`, where `i` is the cell filled at that step.
    pub fn move_descriptor(&self, step: usize) -> Option<MoveDescriptor> {
        let snapshot = self.history.get(step)?;
        let n = self.board_size;
        let position = snapshot.last_move().map(|i| {
            let row = match (i + 1) % n {
                0 => n,
                r => r,
            };
            let col = (i + 1).div_ceil(n);
            (row, col)
        });
        Some(MoveDescriptor { step, position })
    }

    /// All history entries in display order.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        let traveling = self.history.is_time_traveling();
        let current = self.current_step();
        let mut entries: Vec<HistoryEntry> = (0..self.history.len())
            .filter_map(|step| self.move_descriptor(step))
            .map(|descriptor| HistoryEntry {
                selected: traveling && descriptor.step == current,
                descriptor,
            })
            .collect();
        if self.history_order == HistoryOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

fn check_board_size(board_size: usize) -> Result<(), BoardSizeError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
        Ok(())
    } else {
        Err(BoardSizeError::OutOfBounds {
            requested: board_size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    }
}
