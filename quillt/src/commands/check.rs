//! Check command implementation.
//!
//! Scans each input file and reports every error token. The command fails
//! when any file contains a lexical error.

use std::path::{Path, PathBuf};
use std::time::Instant;

use quillc_lex::Scanner;

use crate::commands::common::{error_messages, read_source};
use crate::commands::traits::Command;
use crate::error::{QuilltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Input files to check.
    pub input: Vec<PathBuf>,
    /// Maximum number of errors reported per file (all are still counted).
    pub max_errors: Option<usize>,
}

/// A lexical error found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// File the error was found in.
    pub file: PathBuf,
    /// Line of the error token.
    pub line: u32,
    /// The scanner's message.
    pub message: &'static str,
}

/// Outcome of a check run.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of files scanned.
    pub files_checked: usize,
    /// Number of tokens produced across all files, EOF excluded.
    pub tokens_scanned: usize,
    /// Total number of lexical errors.
    pub error_count: usize,
    /// Errors to display, limited per file by `max_errors`.
    pub findings: Vec<Finding>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<CheckReport> {
        if self.args.input.is_empty() {
            return Err(QuilltError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let mut report = CheckReport::default();
        for path in &self.args.input {
            let source = read_source(path)?;
            self.check_source(path, &source, &mut report);
            report.files_checked += 1;
        }
        Ok(report)
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CheckCommand {
    fn check_source(&self, path: &Path, source: &str, report: &mut CheckReport) {
        let mut reported = 0;
        let mut errors = 0;

        for token in Scanner::new(source) {
            report.tokens_scanned += 1;
            let Some(error) = token.error() else {
                continue;
            };
            errors += 1;
            if self.args.max_errors.map_or(true, |max| reported < max) {
                reported += 1;
                report.findings.push(Finding {
                    file: path.to_path_buf(),
                    line: token.line,
                    message: error.message(),
                });
            }
        }

        tracing::debug!(path = %path.display(), errors, "checked file");
        report.error_count += errors;
    }
}

/// Run the check command, printing each finding to stderr.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let start_time = Instant::now();
    let command = CheckCommand::new(args);
    tracing::debug!(command = CheckCommand::name(), "running command");
    let report = command.execute()?;

    for finding in &report.findings {
        eprintln!(
            "{}:{}: {}",
            finding.file.display(),
            finding.line,
            finding.message
        );
    }

    tracing::info!(
        files = report.files_checked,
        tokens = report.tokens_scanned,
        errors = report.error_count,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "check finished"
    );

    if report.error_count > 0 {
        return Err(QuilltError::CommandExecution(format!(
            "{} {}",
            report.error_count,
            error_messages::LEXICAL_ERRORS
        )));
    }
    Ok(())
}
