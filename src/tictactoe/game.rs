//! Turn management for a single game session

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    board::{Board, Player},
    evaluation::evaluate,
    lines::WinPattern,
    minimax::best_move,
};

/// Who controls the O side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human plays X, the engine plays O
    #[default]
    OnePlayer,
    /// Two humans alternate
    TwoPlayer,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::OnePlayer => "one",
            GameMode::TwoPlayer => "two",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one" | "1" | "1p" | "one-player" => Ok(GameMode::OnePlayer),
            "two" | "2" | "2p" | "two-player" => Ok(GameMode::TwoPlayer),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("invalid game mode '{other}'. Expected one of: one, two"),
            }),
        }
    }
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// What happened on one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub played: Move,
    /// Set when this move ended the game
    pub outcome: Option<GameOutcome>,
}

/// A game in progress. X always moves first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    mode: GameMode,
    board: Board,
    current: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
    winning_pattern: Option<WinPattern>,
}

impl Game {
    pub fn new(mode: GameMode) -> Self {
        Game {
            mode,
            board: Board::new(),
            current: Player::X,
            moves: Vec::new(),
            outcome: None,
            winning_pattern: None,
        }
    }

    /// Start over on an empty board, keeping the mode
    pub fn reset(&mut self) {
        *self = Game::new(self.mode);
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Cells of the completed line once someone has won
    pub fn winning_pattern(&self) -> Option<WinPattern> {
        self.winning_pattern
    }

    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether the engine is due to move
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::OnePlayer && self.current == Player::O && !self.is_over()
    }

    /// Play a human move for the current player.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::GameOver`] once the game has ended,
    /// [`crate::Error::NotYourTurn`] while the engine is due to move, and
    /// the board's move errors for a bad cell. The game is unchanged on error.
    pub fn play(&mut self, position: usize) -> Result<Turn, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if self.is_computer_turn() {
            return Err(crate::Error::NotYourTurn { player: Player::X });
        }
        self.place(position)
    }

    /// Let the engine choose and play O's move in one-player mode.
    pub fn computer_move(&mut self) -> Result<Turn, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if self.mode != GameMode::OnePlayer {
            return Err(crate::Error::InvalidConfiguration {
                message: "computer moves are only available in one-player mode".to_string(),
            });
        }
        if self.current != Player::O {
            return Err(crate::Error::NotYourTurn { player: Player::O });
        }

        let position = best_move(&self.board, Player::O)?;
        debug!(position, "engine selected move");
        self.place(position)
    }

    fn place(&mut self, position: usize) -> Result<Turn, crate::Error> {
        let player = self.current;
        self.board = self.board.apply_move(position, player)?;
        let played = Move { position, player };
        self.moves.push(played);

        let eval = evaluate(&self.board);
        if let Some(winner) = eval.winner {
            self.outcome = Some(GameOutcome::Win(winner));
            self.winning_pattern = eval.pattern;
            info!(%winner, pattern = ?eval.pattern, "game won");
        } else if eval.is_draw {
            self.outcome = Some(GameOutcome::Draw);
            info!("game drawn");
        } else {
            self.current = player.opponent();
        }

        Ok(Turn {
            played,
            outcome: self.outcome,
        })
    }

    /// One-line status for display
    pub fn status(&self) -> String {
        match self.outcome {
            Some(GameOutcome::Win(player)) => format!("Player {player} wins!"),
            Some(GameOutcome::Draw) => "Draw!".to_string(),
            None if self.is_computer_turn() => "Computer is thinking".to_string(),
            None => format!("Player {}'s turn", self.current),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_alternates_and_detects_win() {
        let mut game = Game::new(GameMode::TwoPlayer);
        for pos in [0, 3, 1, 4] {
            let turn = game.play(pos).unwrap();
            assert_eq!(turn.outcome, None);
        }
        assert_eq!(game.current_player(), Player::X);

        let turn = game.play(2).unwrap();
        assert_eq!(turn.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.winning_pattern(), Some([0, 1, 2]));
        assert_eq!(game.status(), "Player X wins!");
        assert!(matches!(game.play(5), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_one_player_rejects_human_move_on_engine_turn() {
        let mut game = Game::new(GameMode::OnePlayer);
        game.play(4).unwrap();
        assert!(game.is_computer_turn());
        assert_eq!(game.status(), "Computer is thinking");
        assert!(matches!(
            game.play(0),
            Err(crate::Error::NotYourTurn { player: Player::X })
        ));

        let turn = game.computer_move().unwrap();
        assert_eq!(turn.played.player, Player::O);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_computer_move_requires_its_turn() {
        let mut game = Game::new(GameMode::OnePlayer);
        assert!(matches!(
            game.computer_move(),
            Err(crate::Error::NotYourTurn { player: Player::O })
        ));

        let mut two = Game::new(GameMode::TwoPlayer);
        two.play(0).unwrap();
        assert!(matches!(
            two.computer_move(),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_occupied_cell_leaves_game_unchanged() {
        let mut game = Game::new(GameMode::TwoPlayer);
        game.play(0).unwrap();
        let before = *game.board();

        assert!(matches!(
            game.play(0),
            Err(crate::Error::InvalidMove { position: 0 })
        ));
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_draw_is_reported() {
        let mut game = Game::new(GameMode::TwoPlayer);
        // X O X
        // X O O
        // O X X
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
        assert_eq!(game.winning_pattern(), None);
        assert_eq!(game.status(), "Draw!");
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut game = Game::new(GameMode::OnePlayer);
        game.play(0).unwrap();
        game.reset();

        assert_eq!(game.mode(), GameMode::OnePlayer);
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), "Player X's turn");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("one".parse::<GameMode>().unwrap(), GameMode::OnePlayer);
        assert_eq!("2p".parse::<GameMode>().unwrap(), GameMode::TwoPlayer);
        assert!("three".parse::<GameMode>().is_err());
    }
}
