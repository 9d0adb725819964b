//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>ms, <number>s, <number>m or a combination (e.g., 500ms, 2s, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when parsing a hotkey combination
#[derive(Debug, Clone, Error)]
#[error("Invalid hotkey \"{input}\": {reason}")]
pub struct HotkeyParseError {
    pub input: String,
    pub reason: String,
}

/// Error when a history capacity is out of range
#[derive(Debug, Clone, Error)]
#[error("Invalid capacity: {value}. Capacity must be between 1 and {max}")]
pub struct CapacityError {
    pub value: usize,
    pub max: usize,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
