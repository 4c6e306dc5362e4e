//! Command modules for the larkt CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod init;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use init::{run_init, InitArgs};
pub use tokens::{run_tokens, TokensArgs};
