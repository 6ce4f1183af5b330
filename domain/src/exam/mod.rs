//! Exam domain
//!
//! - [`size::ExamSize`] — how many pairs the user asked for
//! - [`entities::Exam`] — the pairs drawn from a bank and their file rendering

pub mod entities;
pub mod size;
