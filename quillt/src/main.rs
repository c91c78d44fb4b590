//! Quillt CLI - Command-line driver for the Quill scanner.
//!
//! Loads source files, runs the scanner over them and either dumps the
//! token stream or reports lexical errors.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{QuilltError, Result};

/// Quillt - inspect Quill source at the token level
#[derive(Parser, Debug)]
#[command(name = "quillt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line driver for the Quill scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "QUILLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "QUILLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "QUILLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the quillt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of source files
    ///
    /// Every token is printed, including error tokens and the final EOF.
    Tokens(TokensCommand),

    /// Report lexical errors in source files
    ///
    /// Exits with a failure status if any file contains an error token.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to scan
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Show byte spans in text output
    #[arg(long)]
    spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Maximum number of errors reported per file
    #[arg(long)]
    max_errors: Option<usize>,
}

/// Main entry point for the quillt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging
/// and dispatches to the selected command.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token dumps on stdout stay machine-readable.
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
        .map_err(|e| QuilltError::Config(format!("Failed to initialize logging: {}", e)))?;

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
    }
}

/// Execute the tokens command, letting flags override the configuration.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let format = OutputFormat::resolve(args.format.as_deref(), &config.output.format)?;
    let tokens_args = TokensArgs {
        input: args.input,
        format,
        show_spans: args.spans || config.output.show_spans,
    };
    run_tokens(tokens_args)
}

/// Execute the check command, letting flags override the configuration.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        input: args.input,
        max_errors: args.max_errors.or(config.check.max_errors),
    };
    run_check(check_args)
}
