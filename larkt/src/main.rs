//! larkt - command-line front end for the Lark lexer.
//!
//! Parses arguments with clap, sets up logging, loads `larkt.toml` and
//! dispatches to the subcommand handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_init, run_tokens, CheckArgs, InitArgs, TokensArgs};
use config::Config;
use error::{LarktError, Result};

/// larkt - inspect and check Lark source files
///
/// Prints the token stream of a Lark source file, or checks a set of
/// files for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "larkt")]
#[command(author = "Lark Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and check Lark source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LARKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LARKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LARKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the larkt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Reads standard input when FILE is omitted or `-`.
    Tokens(TokensCommand),

    /// Check source files for lexical errors
    ///
    /// Exits with an error if any file fails to lex.
    Check(CheckCommand),

    /// Write a default larkt.toml
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file (default: standard input)
    file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Show token positions
    #[arg(short, long)]
    spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Stop at the first file with an error
    #[arg(long)]
    fail_fast: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write larkt.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing larkt.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the larkt CLI.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LarktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
        Commands::Init(args) => execute_init(args),
    }
}

/// Execute the tokens command. Flags override the configuration.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let format = match args.format {
        Some(format) => format.parse()?,
        None => config.output.format,
    };
    let tokens_args = TokensArgs {
        file: args.file,
        format,
        show_spans: args.spans || config.output.show_spans,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        fail_fast: args.fail_fast || config.check.fail_fast,
    };
    run_check(check_args)
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    let init_args = InitArgs {
        path: args.path,
        force: args.force,
    };
    run_init(init_args)
}
