//! Exam writer port

use assistant_domain::Exam;
use std::io;
use std::path::Path;

/// Port for persisting a rendered exam.
///
/// Implementations create the target or overwrite it if it already exists.
pub trait ExamWriter: Send + Sync {
    fn write(&self, path: &Path, exam: &Exam) -> io::Result<()>;
}
