//! Punctuation lexing. Every punctuation token is exactly one character and
//! needs no delimiter after it.

use super::Step;
use crate::token::punctuation_from_char;

/// Matches one of `( ) { } , ; .`.
pub fn match_punctuation(input: &str) -> Option<Step<'_>> {
    let c = input.chars().next()?;
    let token = punctuation_from_char(c)?;
    Some(Step::Emit {
        token,
        rest: &input[c.len_utf8()..],
    })
}
