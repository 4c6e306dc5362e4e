//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Phases report problems by building a [`Diagnostic`] and emitting it into
//! a [`Handler`], which collects everything for the driver to print.
//!
//! # Examples
//!
//! ```
//! use larkc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use larkc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected input")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_INPUT)
//!     .span(Span::new(0, 3, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].render("main.lark"),
//!     "error[E0101]: unexpected input\n  --> main.lark:1:1"
//! );
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops the current phase
    Error,
    /// A warning that doesn't stop the phase
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Render the diagnostic as text, naming `origin` (a file name or
    /// `<stdin>`) in the location line.
    ///
    /// ```text
    /// error[E0102]: unterminated string literal
    ///   --> main.lark:3:9
    ///   = help: add a closing `"`
    /// ```
    pub fn render(&self, origin: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };
        out.push_str(&format!("\n  --> {}:{}", origin, self.span));
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("<input>"))
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The handler uses interior mutability so that shared references can be
/// handed to several reporting sites within one phase.
#[derive(Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
