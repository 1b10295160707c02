//! Pipeline Error Types

use data_validator::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a conversion run.
///
/// `Format`, `Csv`, and `Io` are fatal: no partial output is trustworthy, so
/// nothing is written. `Rejected` is raised only under the abort policy.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Row shape does not match the expected column count
    #[error("line {line}: expected {expected} columns, found {found}")]
    Format {
        line: usize,
        found: usize,
        expected: usize,
    },

    /// CSV-level read or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File open, read, or write failure
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// First rejected row under the abort policy
    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

impl PipelineError {
    /// Process exit code for this error class
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Rejected { .. } => 1,
            PipelineError::Format { .. } | PipelineError::Csv(_) | PipelineError::Io { .. } => 2,
        }
    }
}
