//! CLI module for typegen
//!
//! ## Commands
//!
//! - `generate <INPUT>` - Generate Rust declarations from a JSON type model
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

use crate::version::TYPEGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// `--check` found an output file that differs from what would be generated.
    pub const STALE: ExitCode = ExitCode(2);
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

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate Rust declarations from a parsed type model
#[derive(Parser, Debug)]
#[command(name = "typegen")]
#[command(version = TYPEGEN_VERSION)]
#[command(about = "Generate Rust declarations from a parsed type model", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate Rust declarations from a JSON type model
    Generate {
        /// JSON type model (root name -> type node)
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Fully-qualified name whose bare identifier is already taken (repeatable)
        #[arg(long = "reserve", value_name = "FQN")]
        reserve: Vec<String>,
        /// JSON override rules
        #[arg(long, value_name = "FILE")]
        overrides: Option<PathBuf>,
        /// Omit the generated-code header
        #[arg(long)]
        no_header: bool,
        /// Extra derive added to every struct (repeatable)
        #[arg(long = "derive", value_name = "NAME")]
        derives: Vec<String>,
        /// Compare against the output file instead of writing it
        #[arg(long, requires = "output")]
        check: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

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

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            input,
            output,
            reserve,
            overrides,
            no_header,
            derives,
            check,
        } => commands::generate_file(&commands::GenerateOptions {
            input,
            output,
            reserve,
            overrides,
            header: !no_header,
            derives,
            check,
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
