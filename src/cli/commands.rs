//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use ppmanifest_syntax::{ParseConfig, ParseResult, lexer, parse_source, parse_source_with};

use super::render;
use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB).
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a manifest from disk with size validation.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error or invalid UTF-8)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Print syntax problems to stderr.
fn report_problems(path: &Path, source: &str, result: &ParseResult) {
    if result.has_errors() {
        eprint!("{}", render::diagnostics(&path.display().to_string(), source, result.errors()));
    }
}

/// Lex and display tokens.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let output = lexer::lex(&source);
    print!("{}", render::tokens(&output.tokens));
    if !output.errors.is_empty() {
        eprint!("{}", render::diagnostics(&path.display().to_string(), &source, &output.errors));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the tree, as indented text or JSON.
pub fn parse_file(path: &Path, json: bool, max_depth: Option<usize>) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let mut config = ParseConfig::new();
    if let Some(depth) = max_depth {
        config = config.with_max_depth(depth);
    }
    let result = parse_source_with(&source, &config);

    if json {
        let value = render::tree_json(result.tree(), result.root());
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| CliError::failure(format!("Error encoding JSON: {}", e)))?;
        println!("{text}");
    } else {
        print!("{}", result.tree().dump());
    }
    report_problems(path, &source, &result);
    Ok(ExitCode::SUCCESS)
}

/// Check every file, reporting problems; fails if any file has one or cannot be read.
pub fn check_files(paths: &[PathBuf]) -> CliResult<ExitCode> {
    let mut invalid = 0usize;
    let mut unreadable = 0usize;
    for path in paths {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}", e.message);
                unreadable += 1;
                continue;
            }
        };
        let result = parse_source(&source);
        if result.has_errors() {
            invalid += 1;
            report_problems(path, &source, &result);
        } else {
            println!("✓ {}", path.display());
        }
    }

    tracing::debug!(checked = paths.len(), invalid, unreadable, "check finished");
    match check_summary(invalid, unreadable, paths.len()) {
        None => Ok(ExitCode::SUCCESS),
        Some(summary) => Err(CliError::failure(summary)),
    }
}

/// Summary line for a failed `check`, or `None` when every file was read and is clean.
fn check_summary(invalid: usize, unreadable: usize, total: usize) -> Option<String> {
    let mut parts = Vec::new();
    if invalid > 0 {
        parts.push(format!("{invalid} of {total} file(s) have syntax problems"));
    }
    if unreadable > 0 {
        parts.push(format!("{unreadable} of {total} file(s) could not be read"));
    }
    if parts.is_empty() { None } else { Some(parts.join("; ")) }
}

/// Print the class/resource outline of a manifest.
pub fn outline_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let result = parse_source(&source);
    print!("{}", render::outline(&result, &source));
    report_problems(path, &source, &result);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_a_cli_error() {
        let err = read_source(Path::new("definitely/not/here.pp")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Cannot access file"));
    }

    #[test]
    fn test_check_counts_unreadable_files() {
        let err = check_files(&[PathBuf::from("definitely/not/here.pp")]).unwrap_err();
        assert_eq!(err.message, "1 of 1 file(s) could not be read");
    }

    #[test]
    fn test_check_summary_separates_failures() {
        assert_eq!(check_summary(0, 0, 3), None);
        assert_eq!(
            check_summary(2, 0, 3).as_deref(),
            Some("2 of 3 file(s) have syntax problems")
        );
        assert_eq!(
            check_summary(1, 1, 3).as_deref(),
            Some("1 of 3 file(s) have syntax problems; 1 of 3 file(s) could not be read")
        );
    }
}
