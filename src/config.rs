use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::engine::Difficulty;
use crate::error::ConfigError;

/// Computer opponent settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub enabled: bool,
    pub difficulty: Difficulty,
    /// The human plays Black and moves first
    pub human_first: bool,
    /// Pause before the computer replies
    pub reply_delay_ms: u64,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig {
            enabled: true,
            difficulty: Difficulty::Normal,
            human_first: true,
            reply_delay_ms: 300,
        }
    }
}

impl OpponentConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub opponent: OpponentConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            opponent: OpponentConfig::default(),
        }
    }
}

impl GameConfig {
    /// Hot-seat game for two humans
    pub fn two_player(board_size: usize) -> Self {
        GameConfig {
            board_size,
            opponent: OpponentConfig {
                enabled: false,
                ..OpponentConfig::default()
            },
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
            )));
        }
        if self.opponent.reply_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "opponent.reply_delay_ms must be at most 10000".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 15);
        assert!(config.opponent.enabled);
        assert!(config.opponent.human_first);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml(
            r#"
            board_size = 19

            [opponent]
            difficulty = "hard"
            human_first = false
            "#,
        )
        .unwrap();
        assert_eq!(config.board_size, 19);
        assert_eq!(config.opponent.difficulty, Difficulty::Hard);
        assert!(!config.opponent.human_first);
        assert!(config.opponent.enabled);
        assert_eq!(config.opponent.reply_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_rejects_small_board() {
        let err = GameConfig::from_toml("board_size = 4").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        let err = GameConfig::from_toml("[opponent]\ndifficulty = \"insane\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default(Path::new("/nonexistent/gomoku.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_two_player() {
        let config = GameConfig::two_player(9);
        assert!(!config.opponent.enabled);
        assert!(config.validate().is_ok());
    }
}
