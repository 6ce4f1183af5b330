//! Interaction vocabulary for the exam session

use crate::core::error::DomainError;
use std::str::FromStr;

/// Answer to "Create an exam? (Yes | No)"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueChoice {
    Yes,
    No,
}

impl FromStr for ContinueChoice {
    type Err = DomainError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(ContinueChoice::Yes),
            "no" => Ok(ContinueChoice::No),
            _ => Err(DomainError::InvalidChoice(s.trim().to_string())),
        }
    }
}
