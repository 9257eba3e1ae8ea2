//! Application state and logic.

use tictactoe_engine::{GameController, HistoryEntry, MoveOutcome, WinResult};
use tracing::{debug, info, instrument};

use super::input::{Action, Direction, move_cursor};

/// Pane receiving cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The history list.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameController,
    cursor: usize,
    focus: Focus,
    history_cursor: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application around an existing game.
    pub fn new(game: GameController) -> Self {
        let mut app = Self {
            game,
            cursor: 0,
            focus: Focus::default(),
            history_cursor: 0,
            message: None,
            should_quit: false,
        };
        app.sync_history_cursor();
        app
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row of the history list, in display order.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// History list in display order.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.game.history_entries()
    }

    /// Last feedback message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle(&mut self, action: Action) {
        debug!("Handling action");
        match action {
            Action::Move(direction) => self.move_focused(direction),
            Action::Select => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump_to_highlighted(),
            },
            Action::PlaceAt(cell) => {
                // Digits only address boards that fit on the keypad.
                if self.game.board_size() <= 3 {
                    self.cursor = cell.min(self.cell_count() - 1);
                    self.place(cell);
                }
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.sync_history_cursor();
            }
            Action::ToggleOrder => {
                self.game.toggle_history_order();
                self.sync_history_cursor();
            }
            Action::Grow => self.resize(self.game.board_size() + 1),
            Action::Shrink => self.resize(self.game.board_size().saturating_sub(1)),
            Action::Restart => {
                self.game.restart();
                self.cursor = 0;
                self.message = Some("New game".to_string());
                self.sync_history_cursor();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn cell_count(&self) -> usize {
        self.game.board_size() * self.game.board_size()
    }

    fn move_focused(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => {
                self.cursor = move_cursor(self.cursor, direction, self.game.board_size());
            }
            Focus::History => {
                let last = self.game.history().len() - 1;
                self.history_cursor = match direction {
                    Direction::Up | Direction::Left => self.history_cursor.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.history_cursor + 1).min(last),
                };
            }
        }
    }

    fn place(&mut self, cell: usize) {
        self.message = match self.game.apply_move(cell) {
            MoveOutcome::Applied { mark, result } => match result {
                WinResult::Win { player, .. } => Some(format!("{} wins!", player)),
                WinResult::Draw => Some("It's a draw".to_string()),
                WinResult::NoResult => Some(format!("{} played cell {}", mark, cell + 1)),
            },
            MoveOutcome::Ignored(reason) => Some(format!("Move ignored: {}", reason)),
        };
        self.sync_history_cursor();
    }

    fn jump_to_highlighted(&mut self) {
        let Some(entry) = self.history_entries().get(self.history_cursor).copied() else {
            return;
        };
        // Entries are built from the history, so the step always exists.
        match self.game.jump_to(entry.descriptor.step) {
            Ok(()) => self.message = Some(entry.descriptor.to_string()),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn resize(&mut self, board_size: usize) {
        match self.game.set_board_size(board_size) {
            Ok(true) => {
                self.cursor = 0;
                self.message = Some(format!("Board is now {0}x{0}", board_size));
            }
            Ok(false) => {}
            Err(e) => self.message = Some(e.to_string()),
        }
        self.sync_history_cursor();
    }

    /// Points the history highlight at the shown step.
    fn sync_history_cursor(&mut self) {
        let current = self.game.current_step();
        self.history_cursor = self
            .history_entries()
            .iter()
            .position(|entry| entry.descriptor.step == current)
            .unwrap_or(0);
    }
}
