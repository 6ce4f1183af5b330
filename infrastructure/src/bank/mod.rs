//! Local file system question bank source
//!
//! Provides [`FileQuestionBankSource`], the [`QuestionBankSource`] adapter
//! that reads bank files from disk.
//!
//! # Error mapping
//!
//! | `io::ErrorKind` | Result |
//! |-----------------|--------|
//! | `NotFound`, `PermissionDenied`, `IsADirectory` | [`LoadBankError::NotFound`] |
//! | anything else (including invalid UTF-8) | [`LoadBankError::Io`] |

use assistant_application::{LoadBankError, QuestionBankSource};
use assistant_domain::QuestionBank;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Question bank source that reads from the local file system.
#[derive(Debug, Clone, Default)]
pub struct FileQuestionBankSource;

impl FileQuestionBankSource {
    pub fn new() -> Self {
        Self
    }

    fn map_read_error(path: &Path, e: io::Error) -> LoadBankError {
        match e.kind() {
            io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::IsADirectory => LoadBankError::NotFound(path.to_path_buf()),
            _ => LoadBankError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }
}

impl QuestionBankSource for FileQuestionBankSource {
    fn load(&self, path: &Path) -> Result<QuestionBank, LoadBankError> {
        if path.is_dir() {
            return Err(LoadBankError::NotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path).map_err(|e| Self::map_read_error(path, e))?;
        debug!("Read {} bytes from {:?}", text.len(), path);

        Ok(QuestionBank::from_text(&text)?)
    }
}
