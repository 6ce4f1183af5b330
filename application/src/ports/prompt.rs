//! Prompt port for line-oriented user interaction.
//!
//! # Architecture
//!
//! - **Port**: [`PromptPort`] - defined here in application layer
//! - **Adapter**: `TerminalPrompt` - implemented in presentation layer
//!
//! The interactive session only talks to the user through this trait, so a
//! scripted implementation can drive it in tests.

use std::io;
use thiserror::Error;

/// Error type for prompt operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The input stream reached end of file
    #[error("Input closed")]
    Closed,

    /// Input/output error (e.g., terminal read failure)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PromptError {
    pub fn is_closed(&self) -> bool {
        matches!(self, PromptError::Closed)
    }
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Error,
}

/// Port for asking the user questions and showing them messages.
pub trait PromptPort: Send + Sync {
    /// Show `prompt` and read one line, without its line terminator.
    fn ask(&self, prompt: &str) -> Result<String, PromptError>;

    /// Show one line of output.
    fn say(&self, tone: Tone, message: &str);

    /// Show an empty line.
    fn blank_line(&self) {
        self.say(Tone::Plain, "");
    }
}
