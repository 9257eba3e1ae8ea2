//! Game configuration loaded from a TOML file and the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{DEFAULT_BOARD_SIZE, HistoryOrder, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_timeline.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Order of the history list.
    #[serde(default)]
    history_order: HistoryOrder,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_timeline.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            history_order: HistoryOrder::default(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        history_order: Option<HistoryOrder>,
    ) -> Result<Self, ConfigError> {
        if let Some(board_size) = board_size {
            self.board_size = board_size;
        }
        if let Some(history_order) = history_order {
            self.history_order = history_order;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
