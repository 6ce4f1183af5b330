//! Exam size value object

use crate::bank::question_bank::QuestionBank;
use crate::core::error::DomainError;
use std::num::IntErrorKind;

/// A positive number of question/answer pairs to put in an exam
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExamSize(usize);

impl ExamSize {
    /// Create a size, returning None for zero
    pub fn new(value: usize) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Parse typed-in text as a positive integer
    ///
    /// Surrounding whitespace, a leading `+` and single `_` separators
    /// between digits are accepted. Values too large to represent saturate
    /// to `usize::MAX`; they are still positive and can only fail
    /// [`ExamSize::ensure_within`].
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        let digits = strip_digit_separators(input)
            .ok_or_else(|| DomainError::InvalidInteger(input.to_string()))?;
        match digits.parse::<i64>() {
            Ok(value) if value > 0 => Ok(Self(usize::try_from(value).unwrap_or(usize::MAX))),
            Ok(value) => Err(DomainError::NonPositive(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(Self(usize::MAX)),
                IntErrorKind::NegOverflow => Err(DomainError::NonPositive(i64::MIN)),
                _ => Err(DomainError::InvalidInteger(input.to_string())),
            },
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Check that the bank holds at least this many pairs
    pub fn ensure_within(self, bank: &QuestionBank) -> Result<(), DomainError> {
        if self.0 > bank.len() {
            return Err(DomainError::CountExceedsAvailable {
                requested: self.0,
                available: bank.len(),
            });
        }
        Ok(())
    }
}

/// Remove `_` separators, each of which must sit between two ASCII digits
fn strip_digit_separators(input: &str) -> Option<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

impl std::fmt::Display for ExamSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
