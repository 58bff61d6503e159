//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridplay_board::GridGame;
use gridplay_connect_four::ConnectFour;
use gridplay_tictactoe::TicTacToe;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "gridplay.toml";

/// Which game to play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameKind {
    /// 3x3 tic-tac-toe, White against Black.
    #[default]
    TicTacToe,
    /// 7x6 Connect Four, Red against Black.
    ConnectFour,
}

impl GameKind {
    /// Builds a fresh game of this kind.
    #[instrument]
    pub fn build(self) -> Box<dyn GridGame> {
        match self {
            GameKind::TicTacToe => Box::new(TicTacToe::new()),
            GameKind::ConnectFour => Box::new(ConnectFour::new()),
        }
    }
}

/// User settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Game shown at startup.
    default_game: GameKind,

    /// File that receives log output.
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    log_level: String,

    /// Width of one board cell in terminal columns.
    cell_width: u16,

    /// Height of one board cell in terminal rows.
    cell_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_game: GameKind::default(),
            log_file: PathBuf::from("gridplay.log"),
            log_level: "info".to_string(),
            cell_width: 7,
            cell_height: 3,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(game = %config.default_game, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else the default file if it exists, else defaults.
    ///
    /// A missing file is only an error when it was named explicitly.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, game: Option<GameKind>, log_file: Option<PathBuf>) -> Self {
        if let Some(game) = game {
            self.default_game = game;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::new(format!(
                "Cell size must be positive, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
