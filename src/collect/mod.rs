//! Criterion result discovery.
//!
//! Walks `<root>/<benchmark>/<parameter>/new/estimates.json` and records the
//! mean point estimate of every readable leaf. A leaf that is missing or
//! malformed is skipped with a [`SkipReason`]; only an unreadable root is an
//! error.

use crate::error::{Result, SummaryError};
use crate::model::{Measurement, ResultSet};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Directory Criterion writes the latest run into.
const LATEST_RUN_DIR: &str = "new";
/// Estimates file inside [`LATEST_RUN_DIR`].
const ESTIMATES_FILE: &str = "estimates.json";

#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Why a `(benchmark, parameter)` leaf was left out of the [`ResultSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No `new/estimates.json` under the parameter directory.
    MissingEstimates,
    /// The file exists but could not be read.
    Unreadable(String),
    /// Not JSON, or no numeric `mean.point_estimate`.
    Malformed(String),
    /// The mean is negative or not finite.
    InvalidEstimate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEstimates => write!(f, "no {LATEST_RUN_DIR}/{ESTIMATES_FILE}"),
            Self::Unreadable(reason) => write!(f, "unreadable: {reason}"),
            Self::Malformed(reason) => write!(f, "malformed: {reason}"),
            Self::InvalidEstimate => write!(f, "mean estimate is negative or not finite"),
        }
    }
}

/// Result of reading one parameter directory.
#[derive(Debug, Clone, PartialEq)]
pub enum LeafOutcome {
    Recorded(Measurement),
    Skipped(SkipReason),
}

/// A leaf that did not make it into the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLeaf {
    pub benchmark: String,
    pub parameter: String,
    pub reason: SkipReason,
}

/// Everything one walk of the Criterion directory produced.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub results: ResultSet,
    pub skipped: Vec<SkippedLeaf>,
}

/// Walk `root` and collect every readable mean estimate.
///
/// # Errors
///
/// Returns [`SummaryError::CriterionDirNotFound`] if `root` does not exist,
/// or an I/O error if it cannot be listed. Problems below the root never
/// fail the walk.
pub fn collect_results(root: &Path) -> Result<Collection> {
    if !root.is_dir() {
        return Err(SummaryError::CriterionDirNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut collection = Collection::default();

    for entry in fs::read_dir(root)? {
        let group_dir = entry?.path();
        if !group_dir.is_dir() {
            continue;
        }
        let Some(benchmark) = dir_name(&group_dir) else {
            continue;
        };

        let params = match fs::read_dir(&group_dir) {
            Ok(params) => params,
            Err(e) => {
                warn!("Skipping unreadable benchmark group {}: {}", group_dir.display(), e);
                continue;
            }
        };

        for param in params.flatten() {
            let param_dir = param.path();
            if !param_dir.is_dir() {
                continue;
            }
            let Some(parameter) = dir_name(&param_dir) else {
                continue;
            };

            match read_leaf(&benchmark, &parameter, &param_dir) {
                LeafOutcome::Recorded(measurement) => collection.results.insert(measurement),
                LeafOutcome::Skipped(reason) => {
                    debug!(%benchmark, %parameter, %reason, "Skipping benchmark leaf");
                    collection.skipped.push(SkippedLeaf {
                        benchmark: benchmark.clone(),
                        parameter,
                        reason,
                    });
                }
            }
        }
    }

    info!(
        benchmarks = collection.results.benchmark_count(),
        measurements = collection.results.measurement_count(),
        skipped = collection.skipped.len(),
        "Collected criterion results from {}",
        root.display()
    );

    Ok(collection)
}

/// Read the estimates file of a single parameter directory.
#[must_use]
pub fn read_leaf(benchmark: &str, parameter: &str, param_dir: &Path) -> LeafOutcome {
    let path = param_dir.join(LATEST_RUN_DIR).join(ESTIMATES_FILE);

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return LeafOutcome::Skipped(SkipReason::MissingEstimates);
        }
        Err(e) => return LeafOutcome::Skipped(SkipReason::Unreadable(e.to_string())),
    };

    let estimates: Estimates = match serde_json::from_str(&contents) {
        Ok(estimates) => estimates,
        Err(e) => return LeafOutcome::Skipped(SkipReason::Malformed(e.to_string())),
    };

    let mean_ns = estimates.mean.point_estimate;
    if !mean_ns.is_finite() || mean_ns < 0.0 {
        return LeafOutcome::Skipped(SkipReason::InvalidEstimate);
    }

    LeafOutcome::Recorded(Measurement::new(benchmark, parameter, mean_ns))
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
}
