//! Question bank domain
//!
//! A bank is read from plain text where lines alternate between a question
//! and its answer.

pub mod pair;
pub mod question_bank;
