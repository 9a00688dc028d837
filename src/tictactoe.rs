//! Tic-Tac-Toe decision engine

pub mod board;
pub mod evaluation;
pub mod game;
pub mod lines;
pub mod minimax;

pub use board::{Board, Cell, PieceCount, Player};
pub use evaluation::{Evaluation, evaluate};
pub use game::{Game, GameMode, GameOutcome, Move, Turn};
pub use lines::{WIN_PATTERNS, WinPattern, has_won, winning_pattern};
pub use minimax::{SearchResult, best_move, minimax};

/// Place `player`'s mark at `index`, returning the new board.
///
/// Free-function form of [`Board::apply_move`].
pub fn apply_move(board: &Board, index: usize, player: Player) -> crate::Result<Board> {
    board.apply_move(index, player)
}
