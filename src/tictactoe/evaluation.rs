//! Terminal-state evaluation

use serde::{Deserialize, Serialize};

use super::{Board, Player, lines::WinPattern};

/// What a board says about the state of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    pub winner: Option<Player>,
    /// The completed line, for highlighting
    pub pattern: Option<WinPattern>,
    pub is_draw: bool,
}

impl Evaluation {
    /// Has the game ended, by win or draw
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

/// Evaluate a board: winner and line, or draw.
///
/// X is checked before O; a board where both players hold a line is not a
/// reachable position and is reported as an X win.
pub fn evaluate(board: &Board) -> Evaluation {
    for player in [Player::X, Player::O] {
        if let Some(pattern) = board.winning_pattern(player) {
            return Evaluation {
                winner: Some(player),
                pattern: Some(pattern),
                is_draw: false,
            };
        }
    }

    Evaluation {
        winner: None,
        pattern: None,
        is_draw: board.is_full(),
    }
}
