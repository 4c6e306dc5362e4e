//! String literal lexing.
//!
//! The body of a literal is decoded by a two-state machine. `\n` decodes to
//! a newline; a backslash before any other character yields that character
//! unchanged, which is how `\"` and `\\` are written.

use super::Step;
use crate::error::{LexError, LexResult};
use crate::token::{at_delimiter, Token};

/// State of the escape decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EscapeState {
    /// Copying characters through.
    Normal,
    /// The previous character was an unescaped backslash.
    Escaped,
}

/// Decodes a string body, starting just after the opening quote.
///
/// Returns the decoded text and the input after the closing quote.
///
/// # Errors
///
/// - [`LexError::UnterminatedString`] if the input ends before a closing
///   quote (including right after a backslash).
/// - [`LexError::StringBoundary`] if the closing quote is followed by
///   something other than a delimiter.
///
/// ```
/// use larkc_lex::lexer::parse_string_body;
///
/// let (text, rest) = parse_string_body(r#"a\nb" tail"#).unwrap();
/// assert_eq!(text, "a\nb");
/// assert_eq!(rest, " tail");
/// ```
pub fn parse_string_body(body: &str) -> LexResult<(String, &str)> {
    let mut state = EscapeState::Normal;
    let mut content = String::new();

    for (index, c) in body.char_indices() {
        state = match (state, c) {
            (EscapeState::Normal, '\\') => EscapeState::Escaped,
            (EscapeState::Normal, '"') => {
                let rest = &body[index + 1..];
                return if at_delimiter(rest) {
                    Ok((content, rest))
                } else {
                    Err(LexError::StringBoundary)
                };
            },
            (EscapeState::Normal, c) => {
                content.push(c);
                EscapeState::Normal
            },
            (EscapeState::Escaped, 'n') => {
                content.push('\n');
                EscapeState::Normal
            },
            (EscapeState::Escaped, c) => {
                content.push(c);
                EscapeState::Normal
            },
        };
    }

    Err(LexError::UnterminatedString)
}

/// Matches a string literal when the input starts with `"`.
///
/// Any failure is final: the whole cursor becomes the invalid token.
pub fn match_string(input: &str) -> Option<Step<'_>> {
    let body = input.strip_prefix('"')?;
    Some(match parse_string_body(body) {
        Ok((content, rest)) => Step::Emit {
            token: Token::String(content),
            rest,
        },
        Err(error) => Step::Fail { error },
    })
}
