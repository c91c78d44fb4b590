//! Error handling module for the quillt CLI.
//!
//! Lexical errors are not represented here: the scanner reports them as
//! tokens. These are the failures of the driver itself.

use thiserror::Error;

/// Main error type for the quillt CLI application.
#[derive(Error, Debug)]
pub enum QuilltError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be loaded.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finishes unsuccessfully.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using QuilltError.
pub type Result<T> = std::result::Result<T, QuilltError>;
