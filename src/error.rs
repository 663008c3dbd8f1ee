use std::path::PathBuf;

/// Errors that can occur while playing a bridge crossing game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid bridge size: {0}")]
    InvalidSize(String),

    #[error("move must be 'U' or 'D', got '{0}'")]
    InvalidMove(String),

    #[error("retry choice must be 'R' or 'Q', got '{0}'")]
    InvalidRetryChoice(String),

    #[error("'{operation}' is not legal while the game is {phase}")]
    IllegalState {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("input ended before the game finished")]
    InputExhausted,
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
