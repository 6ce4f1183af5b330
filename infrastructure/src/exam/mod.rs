//! Local file system exam writer

use assistant_application::ExamWriter;
use assistant_domain::Exam;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Writes rendered exams to the local file system, replacing existing files.
#[derive(Debug, Clone, Default)]
pub struct FileExamWriter;

impl FileExamWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ExamWriter for FileExamWriter {
    fn write(&self, path: &Path, exam: &Exam) -> io::Result<()> {
        let content = exam.render();
        fs::write(path, &content)?;
        debug!("Wrote {} bytes to {:?}", content.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::{ExamSize, QuestionBank};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn exam_of(text: &str, size: usize) -> Exam {
        let bank = QuestionBank::from_text(text).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        Exam::sample(&bank, ExamSize::new(size).unwrap(), &mut rng).unwrap()
    }

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exam.txt");

        FileExamWriter::new()
            .write(&path, &exam_of("Q1\nA1\n", 1))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Q1\nA1\n\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exam.txt");
        fs::write(&path, "old content that is longer than the exam\n").unwrap();

        FileExamWriter::new()
            .write(&path, &exam_of("Q1\nA1\n", 1))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Q1\nA1\n\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("exam.txt");

        let result = FileExamWriter::new().write(&path, &exam_of("Q1\nA1\n", 1));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
