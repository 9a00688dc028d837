//! Tests for CLI argument handling and command reports

use std::io::{Cursor, Write};

use clap::Parser;
use noughts::{
    GameMode, GameOutcome, Player,
    cli::{
        commands::{
            best_move::{BestMoveArgs, report as best_move_report},
            evaluate::{EvaluateArgs, report as evaluate_report},
            play::{PlayArgs, resolve_mode, run_session},
            self_play::{SelfPlayArgs, resolve, run},
        },
        config::CliConfig,
    },
    selfplay::OpponentKind,
};
use tempfile::tempdir;

mod evaluate_command {
    use super::*;

    #[test]
    fn reports_winner_and_pattern() {
        let args = EvaluateArgs::parse_from(["evaluate", "XXX/OO./..."]);
        let report = evaluate_report(&args).unwrap();
        assert_eq!(report.winner, Some(Player::X));
        assert_eq!(report.pattern, Some([0, 1, 2]));
        assert!(!report.is_draw);
        assert_eq!(report.board, "XXXOO....");
    }

    #[test]
    fn rejects_malformed_board() {
        let args = EvaluateArgs::parse_from(["evaluate", "XXQ......"]);
        let err = evaluate_report(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to parse board"));
    }

    #[test]
    fn report_serializes_to_json() {
        let args = EvaluateArgs::parse_from(["evaluate", "--json", "XOX/XOO/OXX"]);
        let report = evaluate_report(&args).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["is_draw"], true);
        assert!(json["winner"].is_null());
    }
}

mod best_move_command {
    use super::*;

    #[test]
    fn infers_player_from_counts() {
        let args = BestMoveArgs::parse_from(["best-move", "XX./OO./X.."]);
        let report = best_move_report(&args).unwrap();
        assert_eq!(report.player, Player::O);
        assert_eq!(report.position, 5);
        assert_eq!(report.score, 10);
    }

    #[test]
    fn explicit_player_overrides_counts() {
        let args = BestMoveArgs::parse_from(["best-move", "--player", "o", "........."]);
        let report = best_move_report(&args).unwrap();
        assert_eq!(report.player, Player::O);
        assert_eq!(report.position, 0);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn decided_board_is_an_error() {
        let args = BestMoveArgs::parse_from(["best-move", "XXX/OO./..."]);
        let err = best_move_report(&args).unwrap_err();
        assert!(err.to_string().contains("already decided"));
    }

    #[test]
    fn ill_formed_counts_are_rejected() {
        let args = BestMoveArgs::parse_from(["best-move", "OO......."]);
        assert!(best_move_report(&args).is_err());
    }

    #[test]
    fn bad_player_token_is_rejected() {
        let args = BestMoveArgs::parse_from(["best-move", "-p", "z", "........."]);
        let err = best_move_report(&args).unwrap_err();
        assert!(err.to_string().contains("--player"));
    }
}

mod self_play_command {
    use super::*;

    #[test]
    fn flags_override_config() {
        let config = CliConfig::default();
        let args = SelfPlayArgs::parse_from([
            "self-play",
            "--games",
            "3",
            "--opponent",
            "random",
            "--seed",
            "9",
        ]);
        let settings = resolve(&args, &config).unwrap();
        assert_eq!(settings.games, 3);
        assert_eq!(settings.opponent, OpponentKind::Random);
        assert_eq!(settings.seed, Some(9));
        assert!(!settings.progress);
    }

    #[test]
    fn zero_games_is_rejected() {
        let args = SelfPlayArgs::parse_from(["self-play", "--games", "0"]);
        assert!(resolve(&args, &CliConfig::default()).is_err());
    }

    #[test]
    fn optimal_series_is_all_draws() {
        let args = SelfPlayArgs::parse_from(["self-play", "--games", "2"]);
        let settings = resolve(&args, &CliConfig::default()).unwrap();
        let summary = run(&settings).unwrap();
        assert_eq!(summary.games, 2);
        assert_eq!(summary.draws, 2);
        assert_eq!(summary.opponent, "optimal");
    }

    #[test]
    fn random_series_never_beats_engine() {
        let args =
            SelfPlayArgs::parse_from(["self-play", "-g", "10", "-o", "random", "--seed", "42"]);
        let settings = resolve(&args, &CliConfig::default()).unwrap();
        let summary = run(&settings).unwrap();
        assert_eq!(summary.engine_losses, 0);
        assert_eq!(summary.engine_wins + summary.draws, 10);
    }
}

mod config_file {
    use super::*;

    #[test]
    fn loads_json_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noughts.json");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{"log_level": "debug", "self_play": {{"games": 4, "opponent": "random"}}, "play": {{"mode": "two-player"}}}}"#
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.self_play.games, 4);
        assert_eq!(config.self_play.opponent, OpponentKind::Random);
        assert_eq!(config.play.mode, GameMode::TwoPlayer);

        let args = PlayArgs::parse_from(["play"]);
        assert_eq!(resolve_mode(&args, &config).unwrap(), GameMode::TwoPlayer);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = CliConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, noughts::Error::Io { .. }));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"self_play": {"games": 0}}"#).unwrap();
        assert!(matches!(
            CliConfig::load(&path),
            Err(noughts::Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}

mod play_session {
    use super::*;

    fn session(mode: GameMode, input: &str) -> (noughts::Game, String) {
        let mut output = Vec::new();
        let game = run_session(mode, Cursor::new(input.to_string()), &mut output).unwrap();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn two_players_finish_a_game() {
        let (game, output) = session(GameMode::TwoPlayer, "0\n3\n1\n4\n2\nq\n");
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(output.contains("Player X wins!"));
        assert!(output.contains("Winning line: [0, 1, 2]"));
    }

    #[test]
    fn engine_replies_in_one_player_mode() {
        let (game, output) = session(GameMode::OnePlayer, "0\n");
        assert!(output.contains("Computer plays 4"));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn bad_input_is_reported_and_ignored() {
        let (game, output) = session(GameMode::TwoPlayer, "abc\n0\n0\n9\nq\n");
        assert!(output.contains("Not a cell number: 'abc'"));
        assert!(output.contains("already occupied"));
        assert!(output.contains("out of bounds"));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn reset_starts_over() {
        let (game, _) = session(GameMode::TwoPlayer, "0\n1\nr\n");
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn mode_flag_overrides_config() {
        let args = PlayArgs::parse_from(["play", "--mode", "two"]);
        assert_eq!(
            resolve_mode(&args, &CliConfig::default()).unwrap(),
            GameMode::TwoPlayer
        );
        let bad = PlayArgs::parse_from(["play", "-m", "five"]);
        assert!(resolve_mode(&bad, &CliConfig::default()).is_err());
    }
}
