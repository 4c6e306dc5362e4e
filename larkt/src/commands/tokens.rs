//! Tokens command implementation.
//!
//! Lexes one input and prints its token stream, either one token per line
//! or as a JSON array.

use std::io::Write;
use std::path::PathBuf;

use larkc_lex::{scan_spanned, Token};
use larkc_util::{Handler, Span};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{read_source, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Input file; standard input when `None` or `-`.
    pub file: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Include token positions in the output.
    pub show_spans: bool,
}

/// One token as written in JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Token kind, e.g. `NAME`
    pub kind: String,
    /// Payload for literals, names and invalid input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Position of the lexeme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<SpanRecord>,
}

/// Position of a token in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpanRecord {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Line (1-based)
    pub line: u32,
    /// Column (1-based)
    pub column: u32,
}

impl From<Span> for SpanRecord {
    fn from(span: Span) -> Self {
        Self {
            start: span.start,
            end: span.end,
            line: span.line,
            column: span.column,
        }
    }
}

impl TokenRecord {
    /// Builds the record for `token`, keeping `span` only when asked to.
    pub fn new(token: &Token, span: Span, show_spans: bool) -> Self {
        let value = match token {
            Token::Float(value) => Some(serde_json::Value::from(*value)),
            Token::Int(value) => Some(serde_json::Value::from(*value)),
            Token::Name(name) => Some(serde_json::Value::from(name.as_str())),
            Token::String(text) | Token::Invalid(text) => Some(serde_json::Value::from(text.as_str())),
            _ => None,
        };
        Self {
            kind: token.kind().to_string(),
            value,
            span: show_spans.then(|| span.into()),
        }
    }
}

/// Renders the payload of `token` for text output, if it has one.
fn text_payload(token: &Token) -> Option<String> {
    match token {
        Token::Float(_) | Token::Int(_) | Token::String(_) => Some(token.to_string()),
        Token::Name(name) => Some(name.to_string()),
        Token::Invalid(text) => Some(format!("{:?}", text)),
        _ => None,
    }
}

/// Formats one line of text output: `KIND payload @line:column`.
pub fn format_text_line(token: &Token, span: Span, show_spans: bool) -> String {
    let mut line = token.kind().to_string();
    if let Some(payload) = text_payload(token) {
        line.push(' ');
        line.push_str(&payload);
    }
    if show_spans {
        line.push_str(&format!(" @{}", span));
    }
    line
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    /// Number of tokens printed.
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let source = read_source(self.args.file.as_deref())?;
        debug!(origin = %source.origin, format = %self.args.format, "lexing");

        let handler = Handler::new();
        let tokens = scan_spanned(&source.text, &handler);

        match self.args.format {
            OutputFormat::Text => {
                for (token, span) in &tokens {
                    writeln!(out, "{}", format_text_line(token, *span, self.args.show_spans))?;
                }
            },
            OutputFormat::Json => {
                let records: Vec<TokenRecord> = tokens
                    .iter()
                    .map(|(token, span)| TokenRecord::new(token, *span, self.args.show_spans))
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            },
        }

        for diagnostic in handler.diagnostics() {
            eprintln!("{}", diagnostic.render(&source.origin));
        }

        info!(origin = %source.origin, tokens = tokens.len(), "done");
        Ok(tokens.len())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command, printing to standard output.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let command = TokensCommand::new(args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    debug!(command = TokensCommand::name(), "running");
    command.execute(&mut out)?;
    Ok(())
}
