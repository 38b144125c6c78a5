//! Command implementations.

pub mod summarize;
