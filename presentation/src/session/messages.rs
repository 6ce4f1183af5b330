//! User-facing text for the exam session

use assistant_application::LoadBankError;
use assistant_domain::DomainError;
use std::path::Path;

pub const WELCOME: &str = "Welcome to Professor Assistant 2.0.";
pub const NAME_PROMPT: &str = "Please enter your name: ";
pub const CONTINUE_PROMPT: &str = "Create an exam? (Yes | No): ";
pub const INVALID_CHOICE: &str = "Please enter 'Yes' or 'No'.";
pub const BANK_PATH_PROMPT: &str = "Enter the path to the question bank file: ";
pub const BANK_LOADED: &str = "✔ Question bank successfully loaded.";
pub const EXAM_SIZE_PROMPT: &str = "How many Q/A pairs do you want in the exam? ";
pub const NOT_POSITIVE: &str = "Please enter a positive number.";
pub const NOT_AN_INTEGER: &str = "Please enter a valid integer.";
pub const TRY_AGAIN: &str = "Please try again.";
pub const OUTPUT_PATH_PROMPT: &str = "Where should I save the exam file? ";

const FILE_NOT_FOUND: &str = "❌ Error: The file path you provided does not exist.";
const INSUFFICIENT_DATA: &str =
    "The file does not contain enough lines for question–answer pairs.";

pub fn greeting(name: &str) -> String {
    format!(
        "Hello Professor {}. I am here to help you create exams from a question bank.",
        name
    )
}

pub fn farewell(name: &str) -> String {
    format!("Thank you, Professor {}. Have a wonderful day!", name)
}

pub fn pairs_available(count: usize) -> String {
    format!("There are {} question–answer pairs available.", count)
}

pub fn count_exceeds(requested: usize, available: usize) -> String {
    format!(
        "❌ You requested {} questions, but only {} are available.",
        requested, available
    )
}

pub fn exam_created(path: &Path) -> String {
    format!("🎉 Exam created successfully! Saved to: {}", path.display())
}

/// Message for a load failure the session recovers from
pub fn load_failed(error: &LoadBankError) -> String {
    match error {
        LoadBankError::NotFound(_) => FILE_NOT_FOUND.to_string(),
        LoadBankError::Invalid(DomainError::InsufficientData { .. }) => {
            INSUFFICIENT_DATA.to_string()
        }
        other => other.to_string(),
    }
}
