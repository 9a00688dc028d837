//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line interface for evaluating boards,
//! querying the engine for moves, running self-play series and playing
//! interactive games.

pub mod commands;
pub mod config;
pub mod output;

use anyhow::{Context, Result, anyhow};

use crate::tictactoe::{Board, Player};

/// Parse a player flag value (`x` or `o`)
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Parse a board argument, naming it in the error
pub(crate) fn parse_board(value: &str) -> Result<Board> {
    Board::from_string(value).with_context(|| format!("Failed to parse board '{value}'"))
}
