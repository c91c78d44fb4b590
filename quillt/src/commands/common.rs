//! Common types and utilities for quillt commands.

use std::path::Path;

use crate::error::{QuilltError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line
    Text,
    /// A JSON array per file
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Resolve the format from an optional CLI flag, falling back to the
    /// configured value.
    pub fn resolve(flag: Option<&str>, configured: &str) -> Result<Self> {
        if let Some(flag) = flag {
            return Self::parse(flag).ok_or_else(|| {
                QuilltError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, flag))
            });
        }

        Self::parse(configured).ok_or_else(|| {
            QuilltError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                configured
            ))
        })
    }
}

// ============================================================================
// Source Loading
// ============================================================================

/// Read a source file and decode it as UTF-8.
///
/// The scanner works on already-decoded text, so loading and decoding
/// happen here. A leading byte order mark is stripped.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(QuilltError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    let mut source = String::from_utf8(bytes).map_err(|e| {
        QuilltError::FileOperation(format!(
            "{} {}: {}",
            error_messages::INVALID_UTF8,
            path.display(),
            e
        ))
    })?;

    if source.starts_with('\u{FEFF}') {
        source.replace_range(..'\u{FEFF}'.len_utf8(), "");
    }

    tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
    Ok(source)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path is missing or not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when a source file is not UTF-8.
    pub const INVALID_UTF8: &str = "Source is not valid UTF-8:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when lexical errors were found.
    pub const LEXICAL_ERRORS: &str = "lexical error(s) found";
}
