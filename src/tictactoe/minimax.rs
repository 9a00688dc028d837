//! Exhaustive minimax search
//!
//! Scores are absolute: O (the computer) maximises, X minimises, whoever is to
//! move. The search is full depth with no pruning and no memoisation; the
//! recursion depth is bounded by the number of empty cells, so never exceeds 9.
//!
//! Wins are scored the same whatever their depth, so the engine does not
//! prefer a faster win over a slower one or delay a loss. Making the score
//! depth-aware would change which moves are chosen and is left out on purpose.

use serde::{Deserialize, Serialize};

use super::{Board, Cell, Player};

/// Score of a position O has won
pub const WIN_SCORE: i32 = 10;
/// Score of a position X has won
pub const LOSS_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

/// Maximum recursion depth: one level per cell
pub const MAX_DEPTH: usize = 9;

/// Result of one search call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i32,
    /// `None` when the searched board was already terminal
    pub position: Option<usize>,
}

/// Score a terminal board, or `None` if play continues.
pub fn terminal_score(board: &Board) -> Option<i32> {
    if board.has_won(Player::X) {
        Some(LOSS_SCORE)
    } else if board.has_won(Player::O) {
        Some(WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Run minimax for `player` to move on `board`.
///
/// Candidate cells are explored in increasing index order and a later cell
/// replaces the current best only on a strictly better score, so ties go to
/// the lowest index.
pub fn minimax(board: &Board, player: Player) -> SearchResult {
    search(*board, player, 0)
}

fn search(mut board: Board, player: Player, depth: usize) -> SearchResult {
    debug_assert!(depth <= MAX_DEPTH, "search deeper than the board allows");

    if let Some(score) = terminal_score(&board) {
        return SearchResult {
            score,
            position: None,
        };
    }

    let mut best = SearchResult {
        score: match player {
            Player::O => i32::MIN,
            Player::X => i32::MAX,
        },
        position: None,
    };

    for pos in board.empty_positions() {
        board.cells[pos] = player.to_cell();
        let reply = search(board, player.opponent(), depth + 1);
        board.cells[pos] = Cell::Empty;

        let better = match player {
            Player::O => reply.score > best.score,
            Player::X => reply.score < best.score,
        };
        if better {
            best = SearchResult {
                score: reply.score,
                position: Some(pos),
            };
        }
    }

    best
}

/// Best cell for `player` to take on `board`.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] if the board is already won or full;
/// callers are expected to check the outcome before asking for a move.
pub fn best_move(board: &Board, player: Player) -> Result<usize, crate::Error> {
    minimax(board, player)
        .position
        .ok_or(crate::Error::GameOver)
}
