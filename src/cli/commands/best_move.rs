//! Best-move command - Ask the engine for its move on a board

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::{
        output::{print_kv, print_section},
        parse_board, parse_player_token,
    },
    tictactoe::{Player, minimax},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the minimax move for a board")]
pub struct BestMoveArgs {
    /// Board as nine cells, e.g. "XX./OO./..." ('.' for empty)
    pub board: String,

    /// Side to move (`x` or `o`); inferred from the piece counts when omitted
    #[arg(long, short = 'p')]
    pub player: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    pub board: String,
    pub player: Player,
    pub position: usize,
    /// Minimax score from O's side: +10 O wins, 0 draw, -10 X wins
    pub score: i32,
}

/// Run the search for the board named in `args`
pub fn report(args: &BestMoveArgs) -> Result<BestMoveReport> {
    let board = parse_board(&args.board)?;
    board.validate().context("Board is not a legal position")?;

    let player = match &args.player {
        Some(token) => parse_player_token(token, "--player")?,
        None => board.next_player()?,
    };

    let result = minimax(&board, player);
    debug!(board = %board.encode(), %player, ?result, "search finished");
    let Some(position) = result.position else {
        bail!(
            "Board '{}' is already decided; there is no move to make",
            board.encode()
        );
    };

    Ok(BestMoveReport {
        board: board.encode(),
        player,
        position,
        score: result.score,
    })
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let report = report(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Best move");
    print_kv("Player", &report.player.to_string());
    print_kv(
        "Position",
        &format!(
            "{} (row {}, col {})",
            report.position,
            report.position / 3,
            report.position % 3
        ),
    );
    print_kv("Score", &report.score.to_string());
    Ok(())
}
