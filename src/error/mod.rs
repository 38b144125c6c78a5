//! Error types and handling for `bench_summary`.
//!
//! Only conditions that stop the whole run are errors. A malformed
//! `estimates.json` at a single leaf is a [`SkipReason`](crate::collect::SkipReason),
//! and a missing benchmark family just leaves its report section empty.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for `bench_summary` operations.
#[derive(Error, Debug)]
pub enum SummaryError {
    // === Input Errors ===
    /// The Criterion output directory does not exist.
    #[error("No criterion results found at '{}'", path.display())]
    CriterionDirNotFound { path: PathBuf },

    /// The walk finished without recording a single measurement.
    #[error("No benchmark results found in '{}'", path.display())]
    NoResults { path: PathBuf },

    // === Archive Errors ===
    /// The archive file could not be created or written.
    #[error("Failed to write archive '{}': {source}", path.display())]
    ArchiveWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// A configuration value was rejected.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SummaryError {
    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::CriterionDirNotFound { .. } => Some("Run 'cargo bench' first"),
            Self::NoResults { .. } => {
                Some("Check that the benchmarks completed and wrote new/estimates.json")
            }
            Self::Config(_) => Some("Pass a non-empty path or unset the environment override"),
            Self::ArchiveWrite { .. } | Self::Io(_) => None,
        }
    }

    /// Get the exit code for this error.
    ///
    /// Every fatal condition exits with 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Render the error the way it is printed to stderr.
    #[must_use]
    pub fn to_human(&self) -> String {
        match self.suggestion() {
            Some(hint) => format!("Error: {self}\nHint: {hint}"),
            None => format!("Error: {self}"),
        }
    }
}

/// Result type using `SummaryError`.
pub type Result<T> = std::result::Result<T, SummaryError>;
