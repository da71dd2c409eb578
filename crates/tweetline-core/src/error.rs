//! Error types for Tweetline core operations.
//!
//! This module defines the error hierarchy for the input stage and report
//! collection. Errors are descriptive at the core level; the CLI layer maps
//! these to user-facing messages and exit codes.
//!
//! Note that the loaders for optional input files do not use these errors for
//! "file is missing or unreadable" - those paths recover to an empty
//! collection by contract. Only conditions that must reach the caller are
//! represented here.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Tweetline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Core error type for Tweetline operations.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A relation file record with too few fields
    #[error(
        "Malformed row in {} at line {line}: expected at least {expected} fields, found {found}",
        path.display()
    )]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Sanitizer script failure
    #[error("Sanitizer error: {0}")]
    Sanitize(String),

    /// A required report file was not produced by the analysis stage
    #[error("Missing required report: {0}")]
    MissingReport(String),

    /// Filesystem error during collection or sanitization
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Io(err.to_string())
    }
}
