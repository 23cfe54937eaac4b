//! Error types for pagination primitives.

use thiserror::Error;

/// Errors raised when constructing pagination values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A page size of zero was supplied.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// Page size text was not a non-negative whole number.
    #[error("page size must be a whole number, got {input:?}")]
    InvalidPageSize {
        /// The rejected text, trimmed.
        input: String,
    },
}
