//! Draw detection logic.

use crate::types::Mark;
use tracing::instrument;

/// Checks if every cell holds a player mark.
///
/// A full board with no winner is a draw.
#[instrument(skip(cells))]
pub fn is_full(cells: &[Mark]) -> bool {
    cells.iter().all(|m| m.is_player())
}

#[cfg(test)]
mod tests {
    use super::super::win::find_winner;
    use super::*;
    use Mark::{Empty as E, PlayerO as O, PlayerX as X};

    fn is_draw(cells: &[Mark]) -> bool {
        is_full(cells) && find_winner(cells, 3).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[E; 9]));
    }

    #[test]
    fn test_partial_board_not_full() {
        let cells = [E, E, E, E, X, E, E, E, E];
        assert!(!is_full(&cells));
    }

    #[test]
    fn test_draw_detection() {
        // X X O / O O X / X O X
        let cells = [X, X, O, O, O, X, X, O, X];
        assert!(is_draw(&cells));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        let cells = [X, X, X, O, O, X, O, X, O];
        assert!(is_full(&cells));
        assert!(!is_draw(&cells));
    }
}
