//! Presentation layer for professor-assistant
//!
//! This crate contains the CLI definition, the terminal prompt adapter
//! and the interactive exam session.

pub mod cli;
pub mod console;
pub mod session;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::terminal::TerminalPrompt;
pub use session::{ExamSession, SessionError, validator::read_exam_size};
