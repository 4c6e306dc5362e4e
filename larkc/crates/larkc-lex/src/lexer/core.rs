//! Core lexer implementation.
//!
//! The [`Lexer`] drives [`step`] over a [`Cursor`]: trim, identify one
//! token, advance, repeat. Comments are consumed silently. The first
//! failure produces a single [`Token::Invalid`] covering the rest of the
//! input, is reported to the [`Handler`], and ends the stream.

use larkc_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, trace};

use super::identify::{step, Step};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::Token;

/// Lexer for Lark source text.
///
/// # Example
///
/// ```
/// use larkc_util::Handler;
/// use larkc_lex::{Lexer, Token};
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("def x", &handler);
/// assert_eq!(lexer.next_token(), Some(Token::Def));
/// assert!(lexer.next_token().is_some());
/// assert_eq!(lexer.next_token(), None);
/// ```
pub struct Lexer<'a> {
    /// Unconsumed source.
    cursor: Cursor<'a>,

    /// Sink for lexical errors.
    handler: &'a Handler,

    /// Set once the input is exhausted or a failure was produced.
    finished: bool,

    /// Tokens produced so far.
    emitted: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        debug!(bytes = source.len(), "starting scan");
        Self {
            cursor: Cursor::new(source),
            handler,
            finished: false,
            emitted: 0,
        }
    }

    /// Returns the next token and the span of its lexeme, or `None` once
    /// the input is exhausted.
    pub fn next_spanned(&mut self) -> Option<(Token, Span)> {
        if self.finished {
            return None;
        }

        loop {
            self.cursor.trim();
            if self.cursor.is_at_end() {
                self.finish();
                return None;
            }

            let input = self.cursor.remaining();
            let mark = self.cursor.mark();
            match step(input) {
                Step::Skip { rest } => {
                    self.cursor.advance_to(rest);
                    trace!(span = %self.cursor.span_from(mark), "skipped comment");
                },
                Step::Emit { token, rest } => {
                    self.cursor.advance_to(rest);
                    let span = self.cursor.span_from(mark);
                    trace!(kind = %token.kind(), %span, "token");
                    self.emitted += 1;
                    return Some((token, span));
                },
                Step::Fail { error } => {
                    self.cursor.advance_to_end();
                    let span = self.cursor.span_from(mark);
                    self.report(&error, span);
                    self.emitted += 1;
                    self.finish();
                    return Some((Token::Invalid(input.to_string()), span));
                },
            }
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.next_spanned().map(|(token, _)| token)
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Reports a lexical error at `span`.
    fn report(&self, error: &LexError, span: Span) {
        debug!(code = %error.code(), %span, "lexing failed: {}", error);
        let mut builder = DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span);
        if let Some(help) = error.help() {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            debug!(tokens = self.emitted, "finished scan");
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larkc_util::Symbol;

    fn spanned(source: &str) -> (Vec<(Token, Span)>, Handler) {
        let handler = Handler::new();
        let tokens = {
            let mut lexer = Lexer::new(source, &handler);
            std::iter::from_fn(|| lexer.next_spanned()).collect()
        };
        (tokens, handler)
    }

    #[test]
    fn test_spans_track_lines_and_columns() {
        let (tokens, _) = spanned("def x\n  (1)");
        let positions: Vec<_> = tokens
            .iter()
            .map(|(_, span)| (span.line, span.column, span.start, span.end))
            .collect();
        assert_eq!(
            positions,
            vec![(1, 1, 0, 3), (1, 5, 4, 5), (2, 3, 8, 9), (2, 4, 9, 10), (2, 5, 10, 11)]
        );
    }

    #[test]
    fn test_comment_advances_position() {
        let (tokens, _) = spanned("/* a\nb */ x");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Token::Name(Symbol::intern("x")));
        assert_eq!((tokens[0].1.line, tokens[0].1.column), (2, 6));
    }

    #[test]
    fn test_failure_is_reported_once() {
        let (tokens, handler) = spanned("1 \"abc");
        assert_eq!(
            tokens.iter().map(|(t, _)| t.clone()).collect::<Vec<_>>(),
            vec![Token::Int(1), Token::Invalid("\"abc".to_string())]
        );
        assert_eq!(handler.error_count(), 1);

        let diagnostic = &handler.diagnostics()[0];
        assert_eq!(diagnostic.code, Some(LexError::UnterminatedString.code()));
        assert_eq!(diagnostic.span, Span::new(2, 6, 1, 3));
    }

    #[test]
    fn test_invalid_span_ends_at_input_end() {
        let (tokens, _) = spanned("ok 9z rest  \n");
        let (token, span) = &tokens[1];
        assert_eq!(*token, Token::Invalid("9z rest".to_string()));
        assert_eq!((span.start, span.end), (3, 10));
    }

    #[test]
    fn test_stream_ends_after_invalid() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("1x", &handler);
        assert!(matches!(lexer.next_token(), Some(Token::Invalid(_))));
        assert_eq!(lexer.next_token(), None);
        assert_eq!(lexer.next_token(), None);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_clean_input_reports_nothing() {
        let (tokens, handler) = spanned("fun(n){ n }");
        assert_eq!(tokens.len(), 7);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_position_accessors() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a\nbc", &handler);
        lexer.next_token();
        lexer.next_token();
        assert_eq!((lexer.line(), lexer.column(), lexer.position()), (2, 3, 4));
    }
}
