//! Exam entity

use crate::bank::pair::QuestionAnswerPair;
use crate::bank::question_bank::QuestionBank;
use crate::core::error::DomainError;
use crate::exam::size::ExamSize;
use rand::Rng;
use rand::seq::SliceRandom;

/// Pairs drawn from a [`QuestionBank`] without replacement
///
/// The order is whatever the sampler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    pairs: Vec<QuestionAnswerPair>,
}

impl Exam {
    /// Draw `size` distinct pairs uniformly at random
    ///
    /// Fails with [`DomainError::CountExceedsAvailable`] when the bank is too
    /// small.
    pub fn sample<R: Rng + ?Sized>(
        bank: &QuestionBank,
        size: ExamSize,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        size.ensure_within(bank)?;

        let pairs = bank
            .pairs()
            .choose_multiple(rng, size.get())
            .cloned()
            .collect();

        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[QuestionAnswerPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the exam file: question line, answer line, blank line, per pair
    pub fn render(&self) -> String {
        let mut out = String::new();
        for pair in &self.pairs {
            out.push_str(pair.question());
            out.push('\n');
            out.push_str(pair.answer());
            out.push_str("\n\n");
        }
        out
    }
}
