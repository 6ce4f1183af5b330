//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod bank_source;
pub mod exam_writer;
pub mod prompt;
