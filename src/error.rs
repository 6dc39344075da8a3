//! Error types
//!
//! Every error here is fatal to the run. Bad nutrient values are not errors.

use thiserror::Error;

/// Import error types
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Source file ended after {found} of {expected} preamble lines")]
    TruncatedPreamble { expected: usize, found: usize },

    #[error("Batch size must be at least 1")]
    InvalidBatchSize,
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;
