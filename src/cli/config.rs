//! Shared configuration types for CLI commands
//!
//! Settings come from an optional JSON file passed with `--config`; command
//! line flags override whatever the file sets.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{selfplay::OpponentKind, tictactoe::GameMode};

/// Top-level CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,

    pub self_play: SelfPlayConfig,

    pub play: PlayConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            self_play: SelfPlayConfig::default(),
            play: PlayConfig::default(),
        }
    }
}

/// Self-play series configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: usize,

    /// Strategy playing X against the engine
    pub opponent: OpponentKind,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show a progress bar
    pub progress: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            opponent: OpponentKind::default(),
            seed: None,
            progress: false,
        }
    }
}

/// Interactive play configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub mode: GameMode,
}

impl CliConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: CliConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.self_play.games == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "self_play.games must be at least 1".to_string(),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(crate::Error::InvalidConfiguration {
                message: "log_level must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
