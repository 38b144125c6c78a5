//! Report assembly.
//!
//! A report is the title, the "All Operations" table and, when their
//! benchmark families were measured, the comparison and summary sections.

mod comparison;
mod speedup;
mod summary;
mod table;

pub use comparison::{CACHED_MARKER, build_comparison_table};
pub use speedup::Speedup;
pub use summary::{average_cached_speedup, build_summary_stats};
pub use table::{UNAVAILABLE, build_aligned_table};

use crate::config::Families;
use crate::model::ResultSet;

/// The rendered sections of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub all_operations: String,
    pub comparison: Option<String>,
    pub summary: Option<String>,
}

impl Report {
    /// Run every section builder over the same result set.
    #[must_use]
    pub fn build(results: &ResultSet, title: &str, families: &Families) -> Self {
        let all_operations = format!("## All Operations\n\n{}", build_aligned_table(results));
        let comparison = Some(build_comparison_table(results, families)).filter(|s| !s.is_empty());
        let summary = Some(build_summary_stats(results, families)).filter(|s| !s.is_empty());

        tracing::debug!(
            comparison = comparison.is_some(),
            summary = summary.is_some(),
            "Built report sections"
        );

        Self {
            title: title.to_string(),
            all_operations,
            comparison,
            summary,
        }
    }

    /// Sections present in this report, in output order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.title.as_str()),
            Some(self.all_operations.as_str()),
            self.comparison.as_deref(),
            self.summary.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Join the sections with one blank line between them.
    ///
    /// Trailing whitespace is trimmed and the text ends with exactly one
    /// newline. This is both what gets printed and what gets archived.
    #[must_use]
    pub fn render(&self) -> String {
        let body = self
            .sections()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}\n", body.trim_end())
    }
}
