//! Command trait for the larkt CLI.

use std::io::Write;

use crate::error::Result;

/// Standard command trait that all larkt commands implement.
///
/// Commands write their regular output to the writer they are given so
/// that it can be captured in tests; diagnostics go to standard error.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
