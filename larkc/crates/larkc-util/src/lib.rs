//! larkc-util - Core Utilities and Foundation Types
//!
//! This crate holds the types shared by every phase of the Lark toolchain:
//!
//! - [`symbol`] - process-wide string interning ([`Symbol`])
//! - [`span`] - byte offsets plus line/column positions ([`Span`])
//! - [`diagnostic`] - error reporting with codes and a collecting [`Handler`]
//! - [`error`] - error types for the fallible APIs of this crate
//!
//! # Example
//!
//! ```
//! use larkc_util::{DiagnosticBuilder, Handler, Span, Symbol};
//!
//! let name = Symbol::intern("counter");
//! assert_eq!(name.as_str(), "counter");
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected input")
//!     .span(Span::new(4, 9, 1, 5))
//!     .emit(&handler);
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SymbolError, SymbolResult};
pub use span::Span;
pub use symbol::{InternerStats, Symbol};
