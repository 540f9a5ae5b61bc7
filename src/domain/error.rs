//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration: \"{input}\". Use <number>h, <number>m, or <number>s, combined (e.g., 45m, 1h30m, 90s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an invalid priority value is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid priority: \"{input}\". Valid priorities are: quality, size, balanced")]
pub struct InvalidPriorityError {
    pub input: String,
}

/// Error when loading or storing configuration
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    ReadError(String),

    #[error("Could not parse config file: {0}")]
    ParseError(String),

    #[error("Could not write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
