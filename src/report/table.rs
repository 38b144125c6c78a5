//! The "All Operations" table: every benchmark at every parameter.

use crate::format::{AlignedTable, Justify, format_benchmark_name, format_time};
use crate::model::ResultSet;

/// Cell shown when a benchmark has no result for a parameter.
pub const UNAVAILABLE: &str = "N/A";

/// Render one row per benchmark (sorted by name) and one column per
/// distinct parameter (numeric order).
///
/// Returns an empty string for an empty result set.
#[must_use]
pub fn build_aligned_table(results: &ResultSet) -> String {
    if results.is_empty() {
        return String::new();
    }

    let params = results.parameters();

    let headers = std::iter::once("Benchmark".to_string())
        .chain(params.iter().map(|p| format!("{p} files")));
    let mut table = AlignedTable::new(headers);
    for column in 1..=params.len() {
        table = table.justify(column, Justify::Right);
    }

    for (name, bench) in results.benchmarks() {
        let mut row = Vec::with_capacity(params.len() + 1);
        row.push(format_benchmark_name(name));
        row.extend(params.iter().map(|param| {
            bench
                .get(param)
                .map_or_else(|| UNAVAILABLE.to_string(), format_time)
        }));
        table.push_row(row);
    }

    table.render()
}
