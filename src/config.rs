//! Game configuration loaded from TOML.

use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a game session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who controls X.
    #[serde(default = "default_player_x")]
    player_x: PlayerKind,

    /// Who controls O.
    #[serde(default = "default_player_o")]
    player_o: PlayerKind,

    /// Placeholder drawn for empty cells.
    #[serde(default = "default_empty_cell")]
    empty_cell: char,

    /// Clear the terminal before each board in console mode.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Log file for interactive modes.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_x() -> PlayerKind {
    PlayerKind::Minimax
}

fn default_player_o() -> PlayerKind {
    PlayerKind::Human
}

fn default_empty_cell() -> char {
    '-'
}

fn default_clear_screen() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            empty_cell: default_empty_cell(),
            clear_screen: default_clear_screen(),
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

        if config.empty_cell == 'X' || config.empty_cell == 'O' {
            return Err(ConfigError::new(format!(
                "empty_cell {:?} would be mistaken for a mark",
                config.empty_cell
            )));
        }

        info!(
            player_x = %config.player_x,
            player_o = %config.player_o,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given and present, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces the seat assignments that were given.
    pub fn with_players(mut self, player_x: Option<PlayerKind>, player_o: Option<PlayerKind>) -> Self {
        if let Some(kind) = player_x {
            self.player_x = kind;
        }
        if let Some(kind) = player_o {
            self.player_o = kind;
        }
        self
    }

    /// Turns screen clearing on or off.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_seat_minimax_as_x() {
        let config = GameConfig::default();
        assert_eq!(*config.player_x(), PlayerKind::Minimax);
        assert_eq!(*config.player_o(), PlayerKind::Human);
        assert_eq!(*config.empty_cell(), '-');
        assert!(*config.clear_screen());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("player_o = \"minimax\"").unwrap();
        assert_eq!(*config.player_x(), PlayerKind::Minimax);
        assert_eq!(*config.player_o(), PlayerKind::Minimax);
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_overrides_only_replace_given_seats() {
        let config = GameConfig::default().with_players(None, Some(PlayerKind::Minimax));
        assert_eq!(*config.player_x(), PlayerKind::Minimax);
        assert_eq!(*config.player_o(), PlayerKind::Minimax);
        let config = config.with_clear_screen(false);
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = GameConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
