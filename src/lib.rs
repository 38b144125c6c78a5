//! `bench_summary` - Criterion results summarizer.
//!
//! Reads `target/criterion/<benchmark>/<parameter>/new/estimates.json`,
//! renders a Markdown report (all operations, baseline comparison, summary
//! statistics), prints it, and keeps a dated copy in an archive directory.

pub mod archive;
pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod report;

pub use error::{Result, SummaryError};
