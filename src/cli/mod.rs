//! CLI module for the minus parser
//!
//! This module provides the command-line harness around `minus_syntax`.
//!
//! ## Commands
//!
//! - `parse <file>` - Parse a token file and print the parse tree(s)
//! - `tokens <file>` - Decode a token file and print its tokens
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use minus_syntax::config::{DEFAULT_MAX_DEPTH, ParseMode, ParserConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Backtracking recursive-descent parser for `id = expr ;` token lists
#[derive(Parser, Debug)]
#[command(name = "minus")]
#[command(version = VERSION)]
#[command(about = "Backtracking recursive-descent parser for `id = expr ;` token lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log rule entry and backtracking (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub trace: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a token file and print the parse tree
    Parse {
        /// Token file (one `KIND [LEXEME]` per line)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Accept one or more assignments instead of exactly one
        #[arg(long)]
        program: bool,
        /// In program mode, stop at the first bad statement
        #[arg(long = "no-recover", requires = "program")]
        no_recover: bool,
        /// Reject expressions nested deeper than this
        #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Decode a token file and print its tokens
    Tokens {
        /// Token file (one `KIND [LEXEME]` per line)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Command {
    /// Parser configuration implied by the flags of `parse`.
    pub fn parser_config(&self) -> ParserConfig {
        match self {
            Command::Parse {
                program,
                no_recover,
                max_depth,
                ..
            } => {
                let mode = if *program {
                    ParseMode::Program
                } else {
                    ParseMode::Statement
                };
                ParserConfig::new()
                    .with_mode(mode)
                    .with_recovery(!no_recover)
                    .with_max_depth(*max_depth)
            }
            Command::Tokens { .. } => ParserConfig::default(),
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
///
/// Logging goes to stderr and follows `RUST_LOG` (default `warn`); `--trace` overrides it with `trace`.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Install the stderr log subscriber: `--trace` forces `trace`, otherwise `RUST_LOG` (default `warn`).
fn init_tracing(trace: bool) {
    let filter = if trace {
        tracing_subscriber::EnvFilter::new("trace")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.command.parser_config();
    match cli.command {
        Command::Parse { file, .. } => commands::parse_file(&file, &config),
        Command::Tokens { file } => commands::print_tokens(&file),
    }
}
