//! Console adapters

pub mod terminal;
