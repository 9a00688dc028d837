//! Whole games between move-selection strategies
//!
//! The engine plays O against an X strategy. Used to check that perfect play
//! never loses and to exercise the engine from the command line.

use std::{fmt, str::FromStr};

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    tictactoe::{Board, Game, GameMode, GameOutcome, Move, Player, best_move},
};

/// Something that picks a cell for the side to move
pub trait Strategy {
    fn name(&self) -> &str;

    /// Choose an empty cell on a non-terminal board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no move to offer.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;
}

/// Full-depth minimax
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &str {
        "optimal"
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        best_move(board, player)
    }
}

/// Uniform choice over empty cells
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed.unwrap_or_else(random)),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize> {
        board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::GameOver)
    }
}

/// Which strategy plays the X side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    #[default]
    Optimal,
    Random,
}

impl OpponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpponentKind::Optimal => "optimal",
            OpponentKind::Random => "random",
        }
    }

    /// Build the strategy, seeding it when random
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            OpponentKind::Optimal => Box::new(MinimaxStrategy),
            OpponentKind::Random => Box::new(RandomStrategy::new(seed)),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpponentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimal" | "minimax" => Ok(OpponentKind::Optimal),
            "random" => Ok(OpponentKind::Random),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("invalid opponent '{other}'. Expected one of: optimal, random"),
            }),
        }
    }
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

/// Play one game from the empty board, X first.
pub fn play_match(x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<MatchRecord> {
    let mut game = Game::new(GameMode::TwoPlayer);

    let outcome = loop {
        let player = game.current_player();
        let position = match player {
            Player::X => x.select_move(game.board(), player)?,
            Player::O => o.select_move(game.board(), player)?,
        };
        if let Some(outcome) = game.play(position)?.outcome {
            break outcome;
        }
    };

    debug!(moves = game.history().len(), ?outcome, "match finished");
    Ok(MatchRecord {
        moves: game.history().to_vec(),
        outcome,
    })
}

/// Tally of a series of games, seen from the engine's (O's) side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub opponent: String,
    pub games: usize,
    pub engine_wins: usize,
    pub draws: usize,
    pub engine_losses: usize,
}

impl SeriesSummary {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Player::O) => self.engine_wins += 1,
            GameOutcome::Win(Player::X) => self.engine_losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play `games` games of `opponent` (as X) against the engine (as O).
///
/// `on_game` is called after each game, e.g. to advance a progress bar.
pub fn run_series<F>(
    games: usize,
    opponent: &mut dyn Strategy,
    mut on_game: F,
) -> Result<SeriesSummary>
where
    F: FnMut(&MatchRecord),
{
    let mut engine = MinimaxStrategy;
    let mut summary = SeriesSummary {
        opponent: opponent.name().to_string(),
        ..SeriesSummary::default()
    };

    for _ in 0..games {
        let record = play_match(opponent, &mut engine)?;
        summary.record(record.outcome);
        on_game(&record);
    }

    Ok(summary)
}
