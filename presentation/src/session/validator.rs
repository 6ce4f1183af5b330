//! Exam size input loop

use super::messages;
use assistant_application::{PromptError, PromptPort, Tone};
use assistant_domain::{DomainError, ExamSize};

/// Prompt until the user types a positive integer
///
/// Non-numeric and non-positive answers print a message and ask again;
/// only prompt failures end the loop early.
pub fn read_exam_size(prompt: &dyn PromptPort) -> Result<ExamSize, PromptError> {
    loop {
        let input = prompt.ask(messages::EXAM_SIZE_PROMPT)?;
        match ExamSize::parse(&input) {
            Ok(size) => return Ok(size),
            Err(DomainError::NonPositive(_)) => prompt.say(Tone::Error, messages::NOT_POSITIVE),
            Err(_) => prompt.say(Tone::Error, messages::NOT_AN_INTEGER),
        }
    }
}
