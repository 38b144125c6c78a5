//! Baseline vs candidate comparison section.

use crate::config::Families;
use crate::format::{AlignedTable, format_time};
use crate::model::ResultSet;
use crate::report::speedup::Speedup;

/// Marker placed next to the cached (warm) candidate row.
pub const CACHED_MARKER: &str = "⚡";

/// Render the "Performance Comparison" section.
///
/// For each baseline parameter: the baseline row, the first-run row (if that
/// family measured the parameter), the cached row, then a group break.
/// Returns an empty string when the baseline or cached family is missing.
#[must_use]
pub fn build_comparison_table(results: &ResultSet, families: &Families) -> String {
    let (Some(baseline), Some(cached)) = (
        results.benchmark(&families.baseline),
        results.benchmark(&families.cached),
    ) else {
        tracing::debug!(
            baseline = %families.baseline,
            cached = %families.cached,
            "Comparison families absent; skipping comparison section"
        );
        return String::new();
    };
    let first_run = results.benchmark(&families.first_run);

    let mut table = AlignedTable::new([
        "Operation".to_string(),
        "Time".to_string(),
        format!("vs {}", families.versus_label),
        String::new(),
    ]);

    for param in baseline.parameters() {
        let Some(baseline_ns) = baseline.get(param) else {
            continue;
        };

        table.push_row(vec![
            format!("{} ({param} files)", families.baseline_label),
            format_time(baseline_ns),
            "-".to_string(),
            "-".to_string(),
        ]);

        if let Some(first_ns) = first_run.and_then(|bench| bench.get(param)) {
            table.push_row(vec![
                format!("  {} (first run)", families.candidate_label),
                format_time(first_ns),
                Speedup::between(baseline_ns, first_ns).to_string(),
                String::new(),
            ]);
        }

        if let Some(cached_ns) = cached.get(param) {
            table.push_row(vec![
                format!("  {} (cached)", families.candidate_label),
                format_time(cached_ns),
                Speedup::between(baseline_ns, cached_ns).to_string(),
                CACHED_MARKER.to_string(),
            ]);
        }

        table.push_blank();
    }

    format!("## Performance Comparison\n\n{}", table.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Measurement;

    fn results(entries: &[(&str, &str, f64)]) -> ResultSet {
        entries
            .iter()
            .map(|(bench, param, ns)| Measurement::new(*bench, *param, *ns))
            .collect()
    }

    #[test]
    fn test_requires_baseline_and_cached() {
        let families = Families::default();
        let only_baseline = results(&[("git_status_baseline", "10", 100.0)]);
        let only_cached = results(&[("helix_index_cached_run", "10", 50.0)]);
        let unrelated = results(&[("query_staged", "10", 5.0)]);

        assert_eq!(build_comparison_table(&only_baseline, &families), "");
        assert_eq!(build_comparison_table(&only_cached, &families), "");
        assert_eq!(build_comparison_table(&unrelated, &families), "");
        assert_eq!(build_comparison_table(&ResultSet::new(), &families), "");
    }

    #[test]
    fn test_baseline_and_cached_only() {
        let set = results(&[
            ("git_status_baseline", "10", 100.0),
            ("git_status_baseline", "100", 1000.0),
            ("helix_index_cached_run", "10", 50.0),
            ("helix_index_cached_run", "100", 200.0),
        ]);
        let expected = "\
## Performance Comparison

| Operation              | Time    | vs Git      |    |
|------------------------|---------|-------------|----|
| Git status (10 files)  | 100 ns  | -           | -  |
|   Helix (cached)       | 50 ns   | 2.0x faster | ⚡ |
| Git status (100 files) | 1.00 µs | -           | -  |
|   Helix (cached)       | 200 ns  | 5.0x faster | ⚡ |";
        assert_eq!(build_comparison_table(&set, &Families::default()), expected);
    }

    #[test]
    fn test_first_run_rows() {
        let set = results(&[
            ("git_status_baseline", "10", 100.0),
            ("helix_index_first_run", "10", 200.0),
            ("helix_index_cached_run", "10", 0.0),
        ]);
        let section = build_comparison_table(&set, &Families::default());
        let lines: Vec<&str> = section.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[5].starts_with("|   Helix (first run)"));
        assert!(lines[5].contains("2.0x slower"));
        assert!(lines[6].starts_with("|   Helix (cached)"));
        assert!(lines[6].contains("| ∞ "));
    }

    #[test]
    fn test_parameters_missing_from_candidates() {
        let set = results(&[
            ("git_status_baseline", "10", 100.0),
            ("git_status_baseline", "1000", 9000.0),
            ("helix_index_cached_run", "10", 100.0),
        ]);
        let section = build_comparison_table(&set, &Families::default());
        assert!(section.contains("Git status (1000 files)"));
        assert_eq!(section.matches("Helix (cached)").count(), 1);
        assert!(section.contains("same"));
    }
}
