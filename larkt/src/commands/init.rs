//! Init command implementation.
//!
//! Writes a `larkt.toml` holding the default settings, so they can be
//! edited instead of typed on every run.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commands::common::error_messages;
use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{LarktError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write the configuration file into.
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Where the configuration file will be written.
    fn target_path(&self) -> PathBuf {
        self.args
            .path
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    /// Path of the written file.
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let config_path = self.target_path();

        if config_path.exists() && !self.args.force {
            return Err(LarktError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        writeln!(out, "Created {}", config_path.display())?;
        Ok(config_path)
    }

    fn name() -> &'static str {
        "init"
    }
}

/// Run the init command, printing to standard output.
pub fn run_init(args: InitArgs) -> Result<()> {
    let command = InitCommand::new(args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    debug!(command = InitCommand::name(), "running");
    command.execute(&mut out)?;
    Ok(())
}
