//! Application layer for professor-assistant
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    bank_source::{LoadBankError, QuestionBankSource},
    exam_writer::ExamWriter,
    prompt::{PromptError, PromptPort, Tone},
};
pub use use_cases::create_exam::{
    CreateExamError, CreateExamInput, CreateExamOutput, CreateExamUseCase,
};
pub use use_cases::load_bank::LoadBankUseCase;
