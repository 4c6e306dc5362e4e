//! Core error types for larkc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for symbol interning operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// Symbol not found in the interner
    #[error("Symbol not found: index {index}")]
    NotFound {
        /// The index that has no interned string
        index: u32,
    },
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_error_display() {
        let err = SymbolError::NotFound { index: 7 };
        assert_eq!(err.to_string(), "Symbol not found: index 7");
    }
}
