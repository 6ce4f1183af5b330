//! Domain layer for professor-assistant
//!
//! This crate contains the core value objects and the pure rules that
//! operate on them. It has no dependencies on the file system, the terminal
//! or configuration.
//!
//! # Core Concepts
//!
//! - **Question bank**: alternating question/answer lines parsed into
//!   [`QuestionAnswerPair`]s ([`QuestionBank`])
//! - **Exam size**: a validated positive integer ([`ExamSize`])
//! - **Exam**: a random subset of a bank, drawn without replacement
//!   ([`Exam`])

pub mod bank;
pub mod core;
pub mod exam;
pub mod interaction;

// Re-export commonly used types
pub use bank::{pair::QuestionAnswerPair, question_bank::QuestionBank};
pub use crate::core::error::DomainError;
pub use exam::{entities::Exam, size::ExamSize};
pub use interaction::ContinueChoice;
