//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is recoverable: the interactive session reports it and
/// returns to the nearest prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question bank has {lines} line(s), at least 2 are required")]
    InsufficientData { lines: usize },

    #[error("Not an integer: {0:?}")]
    InvalidInteger(String),

    #[error("Exam size must be positive, got {0}")]
    NonPositive(i64),

    #[error("Requested {requested} pairs, but only {available} are available")]
    CountExceedsAvailable { requested: usize, available: usize },

    #[error("Expected 'Yes' or 'No', got {0:?}")]
    InvalidChoice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_exceeds_display() {
        let error = DomainError::CountExceedsAvailable {
            requested: 5,
            available: 3,
        };
        assert_eq!(
            error.to_string(),
            "Requested 5 pairs, but only 3 are available"
        );
    }

    #[test]
    fn test_insufficient_data_display() {
        let error = DomainError::InsufficientData { lines: 1 };
        assert_eq!(
            error.to_string(),
            "Question bank has 1 line(s), at least 2 are required"
        );
    }
}
