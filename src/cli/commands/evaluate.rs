//! Evaluate command - Report the winner, winning line or draw for a board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        output::{format_pattern, print_kv, print_section},
        parse_board,
    },
    tictactoe::{Board, Evaluation, Player, evaluate},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a board position")]
pub struct EvaluateArgs {
    /// Board as nine cells, e.g. "XXX/OO./..." ('.' for empty)
    pub board: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluateReport {
    pub board: String,
    pub winner: Option<Player>,
    pub pattern: Option<[usize; 3]>,
    pub is_draw: bool,
}

impl EvaluateReport {
    fn new(board: &Board, eval: Evaluation) -> Self {
        Self {
            board: board.encode(),
            winner: eval.winner,
            pattern: eval.pattern,
            is_draw: eval.is_draw,
        }
    }
}

/// Parse and evaluate the board named in `args`
pub fn report(args: &EvaluateArgs) -> Result<EvaluateReport> {
    let board = parse_board(&args.board)?;
    Ok(EvaluateReport::new(&board, evaluate(&board)))
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let report = EvaluateReport::new(&board, evaluate(&board));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Evaluation");
    println!("{board}");
    println!();
    let winner = report
        .winner
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    print_kv("Winner", &winner);
    print_kv("Pattern", &format_pattern(report.pattern));
    print_kv("Draw", if report.is_draw { "yes" } else { "no" });
    Ok(())
}
