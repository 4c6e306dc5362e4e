//! Longest-match token identification.
//!
//! Token categories overlap on their first character (`-` may start a
//! number or a name, `/` a comment or a name, `.` a float or a period), so
//! the matchers are tried in a fixed order and the first one that accepts
//! the input wins. Each matcher is responsible for finding its own maximal
//! match and for checking the delimiter that must follow it.

use super::comment::{match_block_comment, match_line_comment};
use super::identifier::match_identifier;
use super::number::{match_float, match_int};
use super::punctuation::match_punctuation;
use super::string::match_string;
use crate::error::LexError;
use crate::token::Token;

/// Outcome of one scanner step at the start of a cursor.
#[derive(Clone, Debug, PartialEq)]
pub enum Step<'a> {
    /// Text was consumed without producing a token (a comment).
    Skip {
        /// Unconsumed input.
        rest: &'a str,
    },
    /// A token was recognised.
    Emit {
        /// The recognised token.
        token: Token,
        /// Unconsumed input.
        rest: &'a str,
    },
    /// The input cannot be lexed from here on.
    Fail {
        /// Why lexing stopped.
        error: LexError,
    },
}

/// A matcher inspects the start of the input. `None` means "not mine".
pub type Matcher = for<'a> fn(&'a str) -> Option<Step<'a>>;

/// Matchers in evaluation order, with a name for tracing.
pub static MATCHERS: [(&str, Matcher); 7] = [
    ("block comment", match_block_comment),
    ("line comment", match_line_comment),
    ("float", match_float),
    ("int", match_int),
    ("identifier", match_identifier),
    ("punctuation", match_punctuation),
    ("string", match_string),
];

/// Runs the matchers over `input` and returns the first step that applies.
///
/// When nothing applies the result is [`LexError::UnexpectedInput`].
pub fn step(input: &str) -> Step<'_> {
    MATCHERS
        .iter()
        .find_map(|(_, matcher)| matcher(input))
        .unwrap_or(Step::Fail {
            error: LexError::UnexpectedInput,
        })
}

/// Identifies the next token at the start of a trimmed, non-empty cursor.
///
/// Returns the token, if any, and the unconsumed input. A discarded comment
/// yields `None`. On failure the whole cursor becomes one
/// [`Token::Invalid`] and the remainder is empty.
///
/// ```
/// use larkc_lex::lexer::identify;
/// use larkc_lex::Token;
///
/// assert_eq!(identify("15.4 x"), (Some(Token::Float(15.4)), " x"));
/// assert_eq!(identify("// note\n1"), (None, "\n1"));
/// ```
pub fn identify(input: &str) -> (Option<Token>, &str) {
    match step(input) {
        Step::Skip { rest } => (None, rest),
        Step::Emit { token, rest } => (Some(token), rest),
        Step::Fail { .. } => (Some(Token::Invalid(input.to_string())), ""),
    }
}
