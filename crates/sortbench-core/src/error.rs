//! Error types for SortBench

use thiserror::Error;

/// Main error type for SortBench operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortBenchError {
    /// Argument rejected at the library boundary (unknown tag, negative size,
    /// inverted value range)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SortBenchError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type alias for SortBench operations
pub type Result<T> = std::result::Result<T, SortBenchError>;
