//! Noughts: an exhaustive minimax engine for Tic-Tac-Toe
//!
//! This crate provides:
//! - Board representation with move application and well-formedness checks
//! - Win and draw detection with the completed line for highlighting
//! - Full-depth minimax move search with deterministic tie-breaking
//! - A game session type for one- and two-player play
//! - The `noughts` command-line front end

pub mod cli;
pub mod error;
pub mod selfplay;
pub mod tictactoe;

pub use error::{Error, Result};
pub use tictactoe::{
    Board, Cell, Evaluation, Game, GameMode, GameOutcome, Player, SearchResult, WinPattern,
    apply_move, best_move, evaluate,
};
