//! Scan cursor over Lark source text.
//!
//! The cursor is a window `position..end` into the source. It only ever
//! moves forward: the start advances past consumed text and the end shrinks
//! past trailing whitespace. Line and column of the window start are kept
//! up to date for spans.

use larkc_util::Span;

use crate::token::is_whitespace;

/// A forward-only view of the unconsumed source.
///
/// # Example
///
/// ```
/// use larkc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("  def x  ");
/// cursor.trim();
/// assert_eq!(cursor.remaining(), "def x");
/// assert_eq!(cursor.column(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the first unconsumed character.
    position: usize,

    /// Byte offset one past the last character still in view.
    end: usize,

    /// Line of `position` (1-based).
    line: u32,

    /// Column of `position` (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over the whole of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            end: source.len(),
            line: 1,
            column: 1,
        }
    }

    /// The unconsumed text still in view.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..self.end]
    }

    /// Returns true when nothing is left in view.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.end
    }

    /// Drops leading and trailing whitespace from the view.
    pub fn trim(&mut self) {
        let remaining = self.remaining();
        let leading = remaining.len() - remaining.trim_start_matches(is_whitespace).len();
        self.advance_bytes(leading);
        self.end = self.position + self.remaining().trim_end_matches(is_whitespace).len();
    }

    /// Moves the start of the view to `rest`, which must be a suffix of
    /// [`Cursor::remaining`].
    ///
    /// Matchers hand back the unconsumed tail of the slice they were given;
    /// this consumes everything in front of it.
    pub fn advance_to(&mut self, rest: &'a str) {
        let consumed = self.remaining().len().saturating_sub(rest.len());
        self.advance_bytes(consumed);
    }

    /// Consumes everything still in view.
    pub fn advance_to_end(&mut self) {
        self.advance_bytes(self.end - self.position);
    }

    fn advance_bytes(&mut self, count: usize) {
        let consumed = &self.source[self.position..self.position + count];
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += count;
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Snapshot of the current position, to be closed with
    /// [`Cursor::span_from`] once a token has been consumed.
    pub fn mark(&self) -> Span {
        Span::point(self.position, self.line, self.column)
    }

    /// Span from `mark` up to the current position.
    pub fn span_from(&self, mark: Span) -> Span {
        Span::new(mark.start, self.position, mark.line, mark.column)
    }
}
