//! Question bank source port

use assistant_domain::{DomainError, QuestionBank};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a question bank
#[derive(Error, Debug)]
pub enum LoadBankError {
    /// The path is missing, is not a file, or cannot be opened
    #[error("Question bank not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file was read but cannot form a bank
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// Any other read failure, including text that is not valid UTF-8
    #[error("Failed to read question bank {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadBankError {
    /// Whether the session can report this error and ask again
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LoadBankError::Io { .. })
    }
}

/// Port for reading a question bank from somewhere addressable by path.
pub trait QuestionBankSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<QuestionBank, LoadBankError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(LoadBankError::NotFound(PathBuf::from("missing.txt")).is_recoverable());
        assert!(
            LoadBankError::Invalid(DomainError::InsufficientData { lines: 1 }).is_recoverable()
        );

        let io_error = LoadBankError::Io {
            path: PathBuf::from("bank.txt"),
            source: io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8"),
        };
        assert!(!io_error.is_recoverable());
    }

    #[test]
    fn test_not_found_display() {
        let error = LoadBankError::NotFound(PathBuf::from("bank.txt"));
        assert_eq!(error.to_string(), "Question bank not found: bank.txt");
    }
}
