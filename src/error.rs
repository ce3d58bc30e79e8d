//! Error types for Gala.

use thiserror::Error;

/// Library-level error type for Gala operations.
#[derive(Error, Debug)]
pub enum GalaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Guest dataset error: {0}")]
    Dataset(String),

    #[error("Guest index error: {0}")]
    Index(#[from] rusqlite::Error),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model API error: {0}")]
    Model(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Gala operations.
pub type Result<T> = std::result::Result<T, GalaError>;
