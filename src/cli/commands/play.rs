//! Play command - Interactive game on the terminal
//!
//! In one-player mode the human plays X and the engine answers as O; in
//! two-player mode both sides are entered at the prompt. Cells are numbered
//! 0-8 row by row. `r` restarts, `q` quits.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use crate::{
    cli::{config::CliConfig, output::render_numbered},
    tictactoe::{Game, GameMode},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Game mode: one (against the engine) or two (two humans)
    #[arg(long, short = 'm')]
    pub mode: Option<String>,
}

/// Pick the mode from the flag, falling back to the config file
pub fn resolve_mode(args: &PlayArgs, config: &CliConfig) -> Result<GameMode> {
    match &args.mode {
        Some(mode) => mode.parse::<GameMode>().context("Invalid --mode"),
        None => Ok(config.play.mode),
    }
}

/// Drive a game from `input`, writing the board and prompts to `output`.
///
/// Returns the game as it stood when input ran out or the player quit.
pub fn run_session<R: BufRead, W: Write>(
    mode: GameMode,
    input: R,
    output: &mut W,
) -> Result<Game> {
    let mut game = Game::new(mode);
    let mut lines = input.lines();

    loop {
        if game.is_computer_turn() {
            writeln!(output, "{}", game.status())?;
            let turn = game.computer_move()?;
            writeln!(output, "Computer plays {}", turn.played.position)?;
        }

        writeln!(output, "\n{}\n", render_numbered(game.board()))?;
        writeln!(output, "{}", game.status())?;
        if game.is_over() {
            if let Some(pattern) = game.winning_pattern() {
                writeln!(output, "Winning line: {pattern:?}")?;
            }
            write!(output, "Enter r to play again or q to quit: ")?;
        } else {
            write!(output, "Cell (0-8), r to restart, q to quit: ")?;
        }
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(game);
        };
        let line = line.context("Failed to read input")?;

        match line.trim() {
            "q" | "quit" => return Ok(game),
            "r" | "reset" => game.reset(),
            "" => {}
            token => match token.parse::<usize>() {
                Ok(position) => {
                    if let Err(e) = game.play(position) {
                        warn!(position, error = %e, "rejected move");
                        writeln!(output, "{e}")?;
                    }
                }
                Err(_) => writeln!(output, "Not a cell number: '{token}'")?,
            },
        }
    }
}

pub fn execute(args: PlayArgs, config: &CliConfig) -> Result<()> {
    let mode = resolve_mode(&args, config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(mode, stdin.lock(), &mut stdout)?;
    Ok(())
}
