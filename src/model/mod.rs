//! Core data types for `bench_summary`.
//!
//! A [`ResultSet`] maps benchmark names to [`BenchmarkResults`], which in
//! turn map parameter labels (Criterion's per-input directories, e.g. `100`)
//! to the mean point estimate in nanoseconds.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// One recorded mean point estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub benchmark: String,
    pub parameter: String,
    pub mean_ns: f64,
}

impl Measurement {
    #[must_use]
    pub fn new(benchmark: impl Into<String>, parameter: impl Into<String>, mean_ns: f64) -> Self {
        Self {
            benchmark: benchmark.into(),
            parameter: parameter.into(),
            mean_ns,
        }
    }
}

/// Numeric sort key for a parameter label.
///
/// Labels made only of ASCII digits sort by value; anything else sorts as 0.
#[must_use]
pub fn parameter_sort_key(label: &str) -> u128 {
    if !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()) {
        label.parse().unwrap_or(0)
    } else {
        0
    }
}

/// Total order over parameter labels: numeric key first, then the label text.
#[must_use]
pub fn compare_parameters(a: &str, b: &str) -> Ordering {
    parameter_sort_key(a)
        .cmp(&parameter_sort_key(b))
        .then_with(|| a.cmp(b))
}

/// Sort parameter labels in report order.
pub fn sort_parameters<S: AsRef<str>>(labels: &mut [S]) {
    labels.sort_by(|a, b| compare_parameters(a.as_ref(), b.as_ref()));
}

/// Mean estimates of one benchmark, keyed by parameter label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkResults {
    values: BTreeMap<String, f64>,
}

impl BenchmarkResults {
    /// Mean for `parameter`, if it was recorded.
    #[must_use]
    pub fn get(&self, parameter: &str) -> Option<f64> {
        self.values.get(parameter).copied()
    }

    #[must_use]
    pub fn contains(&self, parameter: &str) -> bool {
        self.values.contains_key(parameter)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parameter labels in report order.
    #[must_use]
    pub fn parameters(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.values.keys().map(String::as_str).collect();
        sort_parameters(&mut labels);
        labels
    }

    /// `(parameter, mean_ns)` pairs in lexical label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// Arithmetic mean of every recorded value, `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let total: f64 = self.values.values().sum();
        Some(total / self.values.len() as f64)
    }
}

/// All collected results, keyed by benchmark name.
///
/// Benchmark names are unique, and parameter labels are unique within a
/// benchmark; inserting an existing pair replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    benchmarks: BTreeMap<String, BenchmarkResults>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement.
    pub fn insert(&mut self, measurement: Measurement) {
        self.benchmarks
            .entry(measurement.benchmark)
            .or_default()
            .values
            .insert(measurement.parameter, measurement.mean_ns);
    }

    /// Results for `name`, if any measurement was recorded for it.
    #[must_use]
    pub fn benchmark(&self, name: &str) -> Option<&BenchmarkResults> {
        self.benchmarks.get(name).filter(|results| !results.is_empty())
    }

    /// Benchmarks sorted by name.
    pub fn benchmarks(&self) -> btree_map::Iter<'_, String, BenchmarkResults> {
        self.benchmarks.iter()
    }

    /// Distinct parameter labels across all benchmarks, in report order.
    #[must_use]
    pub fn parameters(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .benchmarks
            .values()
            .flat_map(|results| results.values.keys().map(String::as_str))
            .collect();
        labels.sort_unstable();
        labels.dedup();
        sort_parameters(&mut labels);
        labels
    }

    /// Number of benchmarks.
    #[must_use]
    pub fn benchmark_count(&self) -> usize {
        self.benchmarks.len()
    }

    /// Number of recorded `(benchmark, parameter)` pairs.
    #[must_use]
    pub fn measurement_count(&self) -> usize {
        self.benchmarks.values().map(BenchmarkResults::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}

impl FromIterator<Measurement> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        let mut set = Self::new();
        for measurement in iter {
            set.insert(measurement);
        }
        set
    }
}
