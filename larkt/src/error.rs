//! Error handling module for the larkt CLI.

use thiserror::Error;

/// Main error type for the larkt CLI application.
#[derive(Error, Debug)]
pub enum LarktError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a command-line value is not acceptable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when one or more inputs could not be read or lexed.
    #[error("Lexing failed: {0}")]
    Lex(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LarktError.
pub type Result<T> = std::result::Result<T, LarktError>;
