//! Question bank parsing

use super::pair::QuestionAnswerPair;
use crate::core::error::DomainError;

/// An ordered, non-empty sequence of question/answer pairs
///
/// Built from text where line `2k` is a question and line `2k + 1` its
/// answer. Each line is trimmed, blank lines are kept as content, and a
/// trailing unpaired line is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    pairs: Vec<QuestionAnswerPair>,
}

impl QuestionBank {
    /// Minimum number of lines a bank file must contain
    pub const MIN_LINES: usize = 2;

    /// Parse a bank from the full text of a file
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_text(text: &str) -> Result<Self, DomainError> {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.lines().collect();
        Self::from_lines(&lines)
    }

    /// Parse a bank from already-split lines
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, DomainError> {
        if lines.len() < Self::MIN_LINES {
            return Err(DomainError::InsufficientData { lines: lines.len() });
        }

        let pairs = lines
            .chunks_exact(2)
            .map(|chunk| {
                QuestionAnswerPair::new(chunk[0].as_ref().trim(), chunk[1].as_ref().trim())
            })
            .collect();

        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[QuestionAnswerPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false for a parsed bank
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionAnswerPair> {
        self.pairs.iter()
    }
}
