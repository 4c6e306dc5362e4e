//! Common types and utilities for larkt commands.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LarktError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How the `tokens` command prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

impl FromStr for OutputFormat {
    type Err = LarktError;

    /// Parses a format name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(LarktError::Validation(format!(
                "{}: {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

// ============================================================================
// Source Input
// ============================================================================

/// Source text together with the name used for it in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// File path, or `<stdin>`
    pub origin: String,
    /// The text to lex
    pub text: String,
}

/// Reads source text from `path`, or from standard input when `path` is
/// `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<Source> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                LarktError::FileOperation(format!(
                    "{} {}: {}",
                    error_messages::CANNOT_READ,
                    path.display(),
                    e
                ))
            })?;
            Ok(Source {
                origin: path.display().to_string(),
                text,
            })
        },
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(Source {
                origin: "<stdin>".to_string(),
                text,
            })
        },
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when an unknown output format is requested.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when an input file cannot be read.
    pub const CANNOT_READ: &str = "Cannot read";

    /// Error when `init` would overwrite an existing file.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists:";

    /// Error when some inputs could not be read or produced an invalid token.
    pub const FILES_FAILED: &str = "file(s) could not be read or lexed";
}
