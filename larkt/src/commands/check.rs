//! Check command implementation.
//!
//! Lexes each input file and reports lexical errors. Fails when any file
//! could not be read or produced an invalid token.

use std::io::Write;
use std::path::PathBuf;

use larkc_lex::scan_spanned;
use larkc_util::{Handler, Symbol};
use tracing::{debug, info, warn};

use crate::commands::common::{error_messages, read_source};
use crate::commands::traits::Command;
use crate::error::{LarktError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Stop at the first file with an error.
    pub fail_fast: bool,
}

/// Outcome of checking a set of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files that lexed cleanly.
    pub passed: usize,
    /// Files that could not be read or produced an invalid token.
    pub failed: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Lexes every file and tallies the results without turning failures
    /// into an error.
    pub fn check_all(&self, out: &mut dyn Write) -> Result<CheckSummary> {
        let mut summary = CheckSummary::default();

        for path in &self.args.files {
            let passed = match read_source(Some(path.as_path())) {
                Ok(source) => {
                    let handler = Handler::new();
                    let tokens = scan_spanned(&source.text, &handler);
                    debug!(origin = %source.origin, tokens = tokens.len(), "checked");

                    for diagnostic in handler.diagnostics() {
                        eprintln!("{}", diagnostic.render(&source.origin));
                    }
                    if handler.has_errors() {
                        writeln!(out, "{}: FAILED", source.origin)?;
                        false
                    } else {
                        writeln!(out, "{}: ok ({} tokens)", source.origin, tokens.len())?;
                        true
                    }
                },
                Err(error) => {
                    eprintln!("{}", error);
                    writeln!(out, "{}: FAILED", path.display())?;
                    false
                },
            };

            if passed {
                summary.passed += 1;
            } else {
                summary.failed += 1;
                if self.args.fail_fast {
                    warn!(origin = %path.display(), "stopping at first failure");
                    break;
                }
            }
        }

        let stats = Symbol::stats();
        debug!(
            symbols = stats.count,
            hit_rate = stats.hit_rate(),
            "interner"
        );
        Ok(summary)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let summary = self.check_all(out)?;
        info!(passed = summary.passed, failed = summary.failed, "check finished");

        if summary.failed > 0 {
            return Err(LarktError::Lex(format!(
                "{} {}",
                summary.failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(summary)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command, printing to standard output.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let command = CheckCommand::new(args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    debug!(command = CheckCommand::name(), "running");
    command.execute(&mut out)?;
    Ok(())
}
