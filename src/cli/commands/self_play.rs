//! Self-play command - Run a series of games against the engine

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use crate::{
    cli::{
        config::{CliConfig, SelfPlayConfig},
        output::{create_series_progress, print_kv, print_section},
    },
    selfplay::{OpponentKind, SeriesSummary, run_series},
    tictactoe::GameOutcome,
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play a series of games with the engine as O")]
pub struct SelfPlayArgs {
    /// Number of games (overrides the config file)
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Strategy playing X: optimal or random
    #[arg(long, short = 'o')]
    pub opponent: Option<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show a progress bar
    #[arg(long)]
    pub progress: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Merge flags over the file configuration
pub fn resolve(args: &SelfPlayArgs, config: &CliConfig) -> Result<SelfPlayConfig> {
    let mut resolved = config.self_play.clone();
    if let Some(games) = args.games {
        resolved.games = games;
    }
    if let Some(opponent) = &args.opponent {
        resolved.opponent = opponent
            .parse::<OpponentKind>()
            .context("Invalid --opponent")?;
    }
    if args.seed.is_some() {
        resolved.seed = args.seed;
    }
    resolved.progress |= args.progress;

    if resolved.games == 0 {
        bail!("--games must be at least 1");
    }
    Ok(resolved)
}

/// Play the configured series, optionally driving a progress bar
pub fn run(settings: &SelfPlayConfig) -> Result<SeriesSummary> {
    let mut opponent = settings.opponent.build(settings.seed);
    info!(
        games = settings.games,
        opponent = %settings.opponent,
        seed = ?settings.seed,
        "starting self-play series"
    );

    let progress = if settings.progress {
        Some(create_series_progress(settings.games as u64)?)
    } else {
        None
    };

    let summary = run_series(settings.games, opponent.as_mut(), |record| {
        if let Some(pb) = &progress {
            let label = match record.outcome {
                GameOutcome::Win(player) => format!("last: {player} won"),
                GameOutcome::Draw => "last: draw".to_string(),
            };
            pb.set_message(label);
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }
    info!(?summary, "self-play series finished");
    Ok(summary)
}

pub fn execute(args: SelfPlayArgs, config: &CliConfig) -> Result<()> {
    let settings = resolve(&args, config)?;
    let summary = run(&settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_section("Self-play");
    print_kv("Opponent (X)", &summary.opponent);
    print_kv("Games", &summary.games.to_string());
    print_kv("Engine wins", &summary.engine_wins.to_string());
    print_kv("Draws", &summary.draws.to_string());
    print_kv("Engine losses", &summary.engine_losses.to_string());
    Ok(())
}
