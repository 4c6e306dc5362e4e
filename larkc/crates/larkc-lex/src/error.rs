//! Lexical error causes.
//!
//! The scanner only ever surfaces failure as a trailing [`Token::Invalid`];
//! a [`LexError`] names why that token was produced and is what gets
//! reported to the diagnostic handler.
//!
//! [`Token::Invalid`]: crate::Token::Invalid

use larkc_util::DiagnosticCode;
use thiserror::Error;

/// Why the scanner stopped.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// No token category matches the input at this point.
    #[error("unexpected input")]
    UnexpectedInput,

    /// The input ended inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A string literal's closing quote runs into a non-delimiter.
    #[error("string literal must be followed by whitespace or punctuation")]
    StringBoundary,

    /// A numeric literal matched but its value does not fit.
    #[error("numeric literal `{text}` is out of range")]
    NumberOutOfRange {
        /// The literal as written
        text: String,
    },
}

impl LexError {
    /// Diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedInput => DiagnosticCode::E_LEXER_UNEXPECTED_INPUT,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::StringBoundary => DiagnosticCode::E_LEXER_STRING_BOUNDARY,
            LexError::NumberOutOfRange { .. } => DiagnosticCode::E_LEXER_NUMBER_OUT_OF_RANGE,
        }
    }

    /// A suggestion shown alongside the diagnostic, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnexpectedInput => None,
            LexError::UnterminatedString => Some("add a closing `\"`"),
            LexError::StringBoundary => {
                Some("separate the string from what follows with whitespace")
            },
            LexError::NumberOutOfRange { .. } => {
                Some("integers must fit in 64 bits and floats must be finite")
            },
        }
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
