//! Aggregate numbers shown under "Summary Statistics".

use crate::config::Families;
use crate::format::format_time;
use crate::model::ResultSet;

/// Mean of `baseline / cached` over parameters both families measured.
///
/// Parameters whose cached time is zero are left out of the average.
#[must_use]
pub fn average_cached_speedup(results: &ResultSet, families: &Families) -> Option<f64> {
    let baseline = results.benchmark(&families.baseline)?;
    let cached = results.benchmark(&families.cached)?;

    let ratios: Vec<f64> = baseline
        .iter()
        .filter_map(|(param, baseline_ns)| {
            cached
                .get(param)
                .filter(|&cached_ns| cached_ns > 0.0)
                .map(|cached_ns| baseline_ns / cached_ns)
        })
        .collect();

    if ratios.is_empty() {
        return None;
    }
    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

/// Render the "Summary Statistics" section.
///
/// Empty unless both the baseline and cached families are present; each
/// line below the heading is omitted when its data is missing.
#[must_use]
pub fn build_summary_stats(results: &ResultSet, families: &Families) -> String {
    if results.benchmark(&families.baseline).is_none()
        || results.benchmark(&families.cached).is_none()
    {
        return String::new();
    }

    let mut lines = vec!["## Summary Statistics\n".to_string()];

    if let Some(speedup) = average_cached_speedup(results, families) {
        lines.push(format!(
            "**Average speedup (cached):** {speedup:.1}x faster than {}",
            families.versus_label.to_lowercase()
        ));
    }

    if let Some(mean) = results.benchmark(&families.query).and_then(|b| b.mean()) {
        lines.push(format!("**Average query time:** {}", format_time(mean)));
    }

    if let Some(mean) = results.benchmark(&families.index_open).and_then(|b| b.mean()) {
        lines.push(format!("**Average index load time:** {}", format_time(mean)));
    }

    lines.join("\n")
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
    fn test_average_speedup() {
        let set = results(&[
            ("git_status_baseline", "10", 100.0),
            ("git_status_baseline", "100", 1000.0),
            ("helix_index_cached_run", "10", 50.0),
            ("helix_index_cached_run", "100", 200.0),
        ]);
        let families = Families::default();
        assert_eq!(average_cached_speedup(&set, &families), Some(3.5));
        assert_eq!(
            build_summary_stats(&set, &families),
            "## Summary Statistics\n\n**Average speedup (cached):** 3.5x faster than git"
        );
    }

    #[test]
    fn test_zero_cached_time_excluded() {
        let set = results(&[
            ("git_status_baseline", "10", 100.0),
            ("git_status_baseline", "100", 1000.0),
            ("helix_index_cached_run", "10", 0.0),
            ("helix_index_cached_run", "100", 250.0),
        ]);
        assert_eq!(average_cached_speedup(&set, &Families::default()), Some(4.0));
    }

    #[test]
    fn test_heading_only_without_overlap() {
        let set = results(&[
            ("git_status_baseline", "10", 100.0),
            ("helix_index_cached_run", "100", 50.0),
        ]);
        assert_eq!(
            build_summary_stats(&set, &Families::default()),
            "## Summary Statistics\n"
        );
    }

    #[test]
    fn test_query_and_load_lines() {
        let set = results(&[
            ("git_status_baseline", "10", 100.0),
            ("helix_index_cached_run", "10", 25.0),
            ("query_staged", "10", 1_000.0),
            ("query_staged", "100", 3_000.0),
            ("helix_index_open", "10", 4_000_000.0),
        ]);
        let summary = build_summary_stats(&set, &Families::default());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            vec![
                "## Summary Statistics",
                "",
                "**Average speedup (cached):** 4.0x faster than git",
                "**Average query time:** 2.00 µs",
                "**Average index load time:** 4.00 ms",
            ]
        );
    }

    #[test]
    fn test_requires_both_families() {
        let set = results(&[
            ("git_status_baseline", "10", 100.0),
            ("query_staged", "10", 1_000.0),
        ]);
        assert_eq!(build_summary_stats(&set, &Families::default()), "");
    }
}
