//! Winning line detection for Tic-Tac-Toe

use super::{Cell, Player};

/// A winning line: three cell indices on the 3x3 board
pub type WinPattern = [usize; 3];

/// Winning line indices on the 3x3 board
pub const WIN_PATTERNS: [WinPattern; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

fn completes(cells: &[Cell; 9], target: Cell, pattern: &WinPattern) -> bool {
    pattern.iter().all(|&idx| cells[idx] == target)
}

/// Find the first line (in table order) fully held by `player`.
///
/// Used when the caller needs the cells to highlight.
pub fn winning_pattern(cells: &[Cell; 9], player: Player) -> Option<WinPattern> {
    let target = player.to_cell();
    WIN_PATTERNS
        .iter()
        .find(|pattern| completes(cells, target, pattern))
        .copied()
}

/// Check if a player has won by having three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WIN_PATTERNS
        .iter()
        .any(|pattern| completes(cells, target, pattern))
}
