//! Identifier and keyword lexing.
//!
//! An identifier is any maximal run of characters that are not `"`,
//! whitespace or punctuation, and that does not start with a digit. This is
//! deliberately wide: `-`, `+`, `<=` and `a-b` are all names.

use larkc_util::Symbol;

use super::Step;
use crate::token::{at_delimiter, is_delimiter, keyword_from_ident, Token};

fn is_ident_start(c: char) -> bool {
    !c.is_ascii_digit() && is_ident_continue(c)
}

fn is_ident_continue(c: char) -> bool {
    c != '"' && !is_delimiter(c)
}

/// Matches an identifier, then checks it against the reserved words.
///
/// Reserved words are recognised case-insensitively; any other identifier
/// becomes [`Token::Name`] with its text kept as written.
pub fn match_identifier(input: &str) -> Option<Step<'_>> {
    let mut chars = input.char_indices();
    let (_, first) = chars.next()?;
    if !is_ident_start(first) {
        return None;
    }

    let end = chars
        .find(|&(_, c)| !is_ident_continue(c))
        .map_or(input.len(), |(index, _)| index);
    let (text, rest) = input.split_at(end);

    // The run stops at a quote, which is not a delimiter.
    if !at_delimiter(rest) {
        return None;
    }

    let token = keyword_from_ident(text).unwrap_or_else(|| Token::Name(Symbol::intern(text)));
    Some(Step::Emit { token, rest })
}
