use std::path::PathBuf;

/// Errors returned by game-state transitions.
///
/// Every variant is recoverable: a rejected operation leaves the game
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: usize, col: usize },

    #[error("no moves to take back or replay")]
    EmptyHistory,

    #[error("waiting for the computer to move")]
    NotYourTurn,

    #[error(
        "board size {size} is outside {}..={}",
        crate::board::MIN_BOARD_SIZE,
        crate::board::MAX_BOARD_SIZE
    )]
    InvalidBoardSize { size: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
