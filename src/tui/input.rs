//! Key bindings and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor of the focused pane.
    Move(Direction),
    /// Place on the cursor cell, or jump to the highlighted history entry.
    Select,
    /// Place directly on a cell (digits 1-9, numbered row-major).
    PlaceAt(usize),
    /// Switch focus between board and history.
    ToggleFocus,
    /// Flip the history order.
    ToggleOrder,
    /// Grow the board by one.
    Grow,
    /// Shrink the board by one.
    Shrink,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Select,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
        KeyCode::Char('s') => Action::ToggleOrder,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Grow,
        KeyCode::Char('-') => Action::Shrink,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c @ '1'..='9') => Action::PlaceAt(c as usize - '1' as usize),
        _ => return None,
    };
    Some(action)
}

/// Moves a board cursor one step, stopping at the edges.
pub fn move_cursor(cursor: usize, direction: Direction, board_size: usize) -> usize {
    let n = board_size.max(1);
    let (row, col) = (cursor / n, cursor % n);
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(n - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(n - 1)),
    };
    row * n + col
}
