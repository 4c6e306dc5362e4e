//! larkc-lex - Lexical Analyzer for the Lark language
//!
//! This crate turns Lark source text into a flat sequence of [`Token`]s for
//! a parser to consume. Scanning is longest-match: at each position every
//! token category is tried in a fixed order and the first that accepts the
//! input wins, so `15.4` is one float rather than `15`, `.`, `4`.
//!
//! # Example Usage
//!
//! ```
//! use larkc_lex::{scan, Token};
//! use larkc_util::Symbol;
//!
//! let tokens = scan("fun(n){ n }");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Fun,
//!         Token::OParen,
//!         Token::Name(Symbol::intern("n")),
//!         Token::CParen,
//!         Token::OBrace,
//!         Token::Name(Symbol::intern("n")),
//!         Token::CBrace,
//!     ]
//! );
//! ```
//!
//! # Errors
//!
//! Lexing stops at the first error. The rest of the input, from the failure
//! point on, becomes one trailing [`Token::Invalid`]. The [`Lexer`] also
//! reports the cause ([`LexError`]) to a diagnostic [`Handler`].
//!
//! # Module Structure
//!
//! - [`token`] - Token type, reserved words and punctuation tables
//! - [`lexer`] - Matchers, dispatch and the [`Lexer`] driver
//! - [`cursor`] - Forward-only view of the unconsumed source
//! - [`error`] - Lexical error causes

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

use larkc_util::{Handler, Span};

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{identify, Lexer};
pub use token::{keyword_from_ident, Token, TokenKind};

/// Scans `text` into tokens, discarding comments and whitespace.
///
/// Never fails: a lexical error shows up as a final [`Token::Invalid`].
pub fn scan(text: &str) -> Vec<Token> {
    let handler = Handler::new();
    Lexer::new(text, &handler).collect()
}

/// Scans `text` into tokens with their spans, reporting any lexical error
/// to `handler`.
pub fn scan_spanned(text: &str, handler: &Handler) -> Vec<(Token, Span)> {
    let mut lexer = Lexer::new(text, handler);
    std::iter::from_fn(|| lexer.next_spanned()).collect()
}
