//! Infrastructure layer for professor-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod bank;
pub mod config;
pub mod exam;

// Re-export commonly used types
pub use bank::FileQuestionBankSource;
pub use config::{ConfigLoader, FileConfig, FileExamConfig, FileOutputConfig};
pub use exam::FileExamWriter;
