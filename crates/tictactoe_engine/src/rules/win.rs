//! Win detection logic.

use crate::types::Mark;
use tracing::instrument;

/// Enumerates every line of a board of side `board_size`.
///
/// Order: rows top to bottom, columns left to right, the main diagonal, then
/// the anti-diagonal. For a 3x3 board this yields the eight classic lines.
#[instrument]
pub fn lines(board_size: usize) -> Vec<Vec<usize>> {
    let n = board_size;
    if n == 0 {
        return Vec::new();
    }

    let rows = (0..n).map(|r| (0..n).map(|c| r * n + c).collect());
    let cols = (0..n).map(|c| (0..n).map(|r| r * n + c).collect());
    let diagonal = (0..n).map(|i| i * n + i).collect();
    let anti_diagonal = (0..n).map(|i| i * n + (n - 1 - i)).collect();

    rows.chain(cols)
        .chain([diagonal, anti_diagonal])
        .collect()
}

/// Returns the first line uniformly filled with a player mark.
#[instrument(skip(cells))]
pub fn find_winner(cells: &[Mark], board_size: usize) -> Option<(Mark, Vec<usize>)> {
    lines(board_size).into_iter().find_map(|line| {
        let first = cells.get(*line.first()?).copied()?;
        let uniform = first.is_player()
            && line.iter().all(|&i| cells.get(i).copied() == Some(first));
        uniform.then_some((first, line))
    })
}
