//! Command modules for the quillt CLI.
//!
//! Each subcommand lives in its own file and implements [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
