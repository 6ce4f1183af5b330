//! Use cases (application services)

pub mod create_exam;
pub mod load_bank;
