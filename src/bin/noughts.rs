//! noughts CLI - Tic-Tac-Toe minimax engine on the command line
//!
//! This CLI provides:
//! - Board evaluation (winner, winning line, draw)
//! - Best-move queries against the minimax engine
//! - Self-play series against optimal or random opponents
//! - Interactive one- and two-player games

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use noughts::cli::{
    commands::{best_move, evaluate, play, self_play},
    config::CliConfig,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Exhaustive minimax engine for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the winner, winning line or draw for a board
    Evaluate(evaluate::EvaluateArgs),

    /// Compute the engine's move for a board
    BestMove(best_move::BestMoveArgs),

    /// Play a series of games with the engine as O
    SelfPlay(self_play::SelfPlayArgs),

    /// Play an interactive game
    Play(play::PlayArgs),
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(level);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::BestMove(args) => best_move::execute(args),
        Commands::SelfPlay(args) => self_play::execute(args, &config),
        Commands::Play(args) => play::execute(args, &config),
    }
}
