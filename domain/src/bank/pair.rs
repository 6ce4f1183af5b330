//! Question/answer pair value object

/// One question with the answer line that follows it (Value Object)
///
/// Blank strings are allowed; the bank file decides what the content is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionAnswerPair {
    question: String,
    answer: String,
}

impl QuestionAnswerPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

impl std::fmt::Display for QuestionAnswerPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.question)?;
        write!(f, "{}", self.answer)
    }
}
