//! CLI module for ppmanifest
//!
//! This module provides a command-line interface for inspecting manifests.
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream
//! - `parse <file>` - Print the syntax tree (indented text or JSON)
//! - `check <file>...` - Report syntax problems; exits non-zero if any file has one or cannot be read
//! - `outline <file>` - Print classes and resources, flagging metaparameters
//!
//! ## Modules
//!
//! - `commands` - Command implementations (file I/O and printing)
//! - `render` - Pure renderers for trees, outlines and diagnostics
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
pub mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

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
#[derive(Debug, Error)]
#[error("{message}")]
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect and check manifests
#[derive(Parser, Debug)]
#[command(name = "ppmanifest")]
#[command(version = VERSION)]
#[command(about = "Error-tolerant manifest parser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream of a manifest
    Lex {
        /// Manifest to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the syntax tree of a manifest
    Parse {
        /// Manifest to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit the tree as JSON instead of indented text
        #[arg(long)]
        json: bool,
        /// Maximum nesting depth before constructs are skipped (capped at 128)
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Report syntax problems in one or more manifests
    Check {
        /// Manifests to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the classes and resources declared in a manifest
    Outline {
        /// Manifest to outline
        #[arg(value_name = "FILE")]
        file: PathBuf,
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
fn execute(cli: Cli) -> CliResult<ExitCode> {
    tracing::debug!(command = ?cli.command, "executing");
    match cli.command {
        Command::Lex { file } => commands::lex_file(&file),
        Command::Parse { file, json, max_depth } => commands::parse_file(&file, json, max_depth),
        Command::Check { files } => commands::check_files(&files),
        Command::Outline { file } => commands::outline_file(&file),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["ppmanifest", "lex", "site.pp"]).unwrap();
        assert!(matches!(cli.command, Command::Lex { .. }));
    }

    #[test]
    fn test_cli_parse_parse_with_flags() {
        let cli = Cli::try_parse_from(["ppmanifest", "parse", "site.pp", "--json", "--max-depth", "12"]).unwrap();
        if let Command::Parse { json, max_depth, .. } = cli.command {
            assert!(json);
            assert_eq!(max_depth, Some(12));
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_check_many() {
        let cli = Cli::try_parse_from(["ppmanifest", "check", "a.pp", "b.pp"]).unwrap();
        if let Command::Check { files } = cli.command {
            assert_eq!(files, vec![PathBuf::from("a.pp"), PathBuf::from("b.pp")]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_a_file() {
        assert!(Cli::try_parse_from(["ppmanifest", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_outline() {
        let cli = Cli::try_parse_from(["ppmanifest", "outline", "init.pp"]).unwrap();
        assert!(matches!(cli.command, Command::Outline { .. }));
    }

    #[test]
    fn test_cli_rejects_non_numeric_depth() {
        assert!(Cli::try_parse_from(["ppmanifest", "parse", "x.pp", "--max-depth", "deep"]).is_err());
    }
}
