//! Load Bank use case.
//!
//! Reads a question bank through a [`QuestionBankSource`] and logs the
//! outcome. Each call produces a fresh bank; nothing is cached between
//! calls.

use crate::ports::bank_source::{LoadBankError, QuestionBankSource};
use assistant_domain::QuestionBank;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for loading a question bank.
#[derive(Clone)]
pub struct LoadBankUseCase {
    source: Arc<dyn QuestionBankSource>,
}

impl LoadBankUseCase {
    pub fn new(source: Arc<dyn QuestionBankSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self, path: &Path) -> Result<QuestionBank, LoadBankError> {
        match self.source.load(path) {
            Ok(bank) => {
                info!("Loaded {} pairs from {}", bank.len(), path.display());
                Ok(bank)
            }
            Err(e) => {
                warn!("Could not load question bank: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::DomainError;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct InMemorySource {
        files: HashMap<PathBuf, String>,
    }

    impl InMemorySource {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(PathBuf::from(path), content.to_string());
            Self { files }
        }
    }

    impl QuestionBankSource for InMemorySource {
        fn load(&self, path: &Path) -> Result<QuestionBank, LoadBankError> {
            let text = self
                .files
                .get(path)
                .ok_or_else(|| LoadBankError::NotFound(path.to_path_buf()))?;
            Ok(QuestionBank::from_text(text)?)
        }
    }

    #[test]
    fn test_execute_returns_bank() {
        let use_case = LoadBankUseCase::new(Arc::new(InMemorySource::with_file(
            "bank.txt",
            "Q1\nA1\nQ2\nA2\n",
        )));
        let bank = use_case.execute(Path::new("bank.txt")).unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_execute_passes_errors_through() {
        let use_case =
            LoadBankUseCase::new(Arc::new(InMemorySource::with_file("bank.txt", "Q1\n")));

        let missing = use_case.execute(Path::new("other.txt"));
        assert!(matches!(missing, Err(LoadBankError::NotFound(_))));

        let short = use_case.execute(Path::new("bank.txt"));
        assert!(matches!(
            short,
            Err(LoadBankError::Invalid(DomainError::InsufficientData { lines: 1 }))
        ));
    }
}
