//! Comment skipping.
//!
//! Both forms are recognised only at the start of the cursor and produce no
//! token. Block comments do not nest; the first `*/` closes them.

use super::Step;

/// Matches `/* ... */`, which may span lines.
///
/// An unterminated `/*` is not a comment; it falls through to the later
/// matchers.
pub fn match_block_comment(input: &str) -> Option<Step<'_>> {
    let body = input.strip_prefix("/*")?;
    let close = body.find("*/")?;
    Some(Step::Skip {
        rest: &body[close + 2..],
    })
}

/// Matches `//` through the end of the line. The newline stays in the input.
pub fn match_line_comment(input: &str) -> Option<Step<'_>> {
    let body = input.strip_prefix("//")?;
    let end = body.find('\n').unwrap_or(body.len());
    Some(Step::Skip { rest: &body[end..] })
}
