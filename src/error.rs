//! Error types for the diffcov CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal for the run
//! and maps to an exit code; non-fatal conditions (unparsable coverage
//! attributes, zero coverable lines) never surface as errors.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffcov operations.
#[derive(Error, Debug)]
pub enum DiffCovError {
    /// Missing or unreadable input, or an invalid configuration.
    #[error("{0}")]
    InvalidInvocation(String),

    /// A hunk header whose new-side range is neither `start` nor `start,count`.
    #[error("malformed hunk header at diff line {line_number}: '{line}'")]
    MalformedHunk { line_number: usize, line: String },

    /// The coverage document could not be read as a coverage tree.
    #[error("invalid coverage document: {0}")]
    CoverageParse(String),

    /// The same (file, line) pair appeared twice in the coverage document.
    #[error("duplicate coverage entry for {file}:{line}")]
    DuplicateCoverageKey { file: String, line: u32 },

    /// Diff coverage fell below the configured minimum.
    #[error("diff coverage {actual:.2}% is below the required {required:.2}%")]
    ThresholdNotMet { actual: f64, required: f64 },

    /// The report artifact could not be written.
    #[error("failed to write coverage report: {0}")]
    ReportWrite(String),
}

impl DiffCovError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffCovError::InvalidInvocation(_) => exit_codes::USER_ERROR,
            DiffCovError::MalformedHunk { .. } => exit_codes::INPUT_FAILURE,
            DiffCovError::CoverageParse(_) => exit_codes::INPUT_FAILURE,
            DiffCovError::DuplicateCoverageKey { .. } => exit_codes::INPUT_FAILURE,
            DiffCovError::ThresholdNotMet { .. } => exit_codes::THRESHOLD_FAILURE,
            DiffCovError::ReportWrite(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for diffcov operations.
pub type Result<T> = std::result::Result<T, DiffCovError>;
