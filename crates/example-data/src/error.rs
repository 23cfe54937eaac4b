//! Error types for the example-data crate.

use thiserror::Error;

/// Errors that can occur during user generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested dataset size is not a positive number.
    #[error("user count must be positive, got {count}")]
    InvalidArgument {
        /// The rejected count.
        count: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_formats_correctly() {
        let err = GenerationError::InvalidArgument { count: 0 };
        assert_eq!(err.to_string(), "user count must be positive, got 0");
    }
}
