//! Configuration management for `bench_summary`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides
//! 2. Environment variables (`BENCH_SUMMARY_*`)
//! 3. Defaults
//!
//! Run without flags or environment, the tool reads `target/criterion` and
//! archives into `benches/archive`, both relative to the working directory.

use crate::error::{Result, SummaryError};
use std::env;
use std::path::{Path, PathBuf};

/// Default Criterion output directory.
pub const DEFAULT_CRITERION_DIR: &str = "target/criterion";
/// Default archive directory.
pub const DEFAULT_ARCHIVE_DIR: &str = "benches/archive";
/// Default report title.
pub const DEFAULT_TITLE: &str = "# Helix Benchmark Results";

const ENV_PREFIX: &str = "BENCH_SUMMARY_";

/// Benchmark families the comparison and summary sections look for, plus
/// the labels they are shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Families {
    /// Reference implementation every candidate is compared against.
    pub baseline: String,
    /// Candidate measured from a cold start (optional in the report).
    pub first_run: String,
    /// Candidate measured with warm caches (required for comparison).
    pub cached: String,
    /// Query latency family averaged in the summary.
    pub query: String,
    /// Index open/load family averaged in the summary.
    pub index_open: String,
    /// Row label prefix for baseline rows, e.g. `Git status (10 files)`.
    pub baseline_label: String,
    /// Short name of the baseline used in headers and the summary.
    pub versus_label: String,
    /// Row label for candidate rows, e.g. `  Helix (cached)`.
    pub candidate_label: String,
}

impl Default for Families {
    fn default() -> Self {
        Self {
            baseline: "git_status_baseline".to_string(),
            first_run: "helix_index_first_run".to_string(),
            cached: "helix_index_cached_run".to_string(),
            query: "query_staged".to_string(),
            index_open: "helix_index_open".to_string(),
            baseline_label: "Git status".to_string(),
            versus_label: "Git".to_string(),
            candidate_label: "Helix".to_string(),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub criterion_dir: PathBuf,
    pub archive_dir: PathBuf,
    pub archive_enabled: bool,
    pub title: String,
    pub families: Families,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            criterion_dir: PathBuf::from(DEFAULT_CRITERION_DIR),
            archive_dir: PathBuf::from(DEFAULT_ARCHIVE_DIR),
            archive_enabled: true,
            title: DEFAULT_TITLE.to_string(),
            families: Families::default(),
        }
    }
}

impl ReportConfig {
    /// Resolve defaults, then the process environment, then CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Config`] if a directory override is empty.
    pub fn load(cli: &CliOverrides) -> Result<Self> {
        let layer = ConfigLayer::merge_layers(&[ConfigLayer::from_env(), cli.as_layer()]);
        Self::from_layer(&layer)
    }

    /// Apply one merged layer on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Config`] if a directory override is empty.
    pub fn from_layer(layer: &ConfigLayer) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = &layer.criterion_dir {
            config.criterion_dir = non_empty_path("criterion-dir", dir)?;
        }
        if let Some(dir) = &layer.archive_dir {
            config.archive_dir = non_empty_path("archive-dir", dir)?;
        }
        if let Some(enabled) = layer.archive_enabled {
            config.archive_enabled = enabled;
        }

        tracing::debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

/// One source of optional settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub criterion_dir: Option<PathBuf>,
    pub archive_dir: Option<PathBuf>,
    pub archive_enabled: Option<bool>,
}

impl ConfigLayer {
    /// Merge another layer on top of this one (higher precedence wins).
    pub fn merge_from(&mut self, other: &Self) {
        if other.criterion_dir.is_some() {
            self.criterion_dir.clone_from(&other.criterion_dir);
        }
        if other.archive_dir.is_some() {
            self.archive_dir.clone_from(&other.archive_dir);
        }
        if other.archive_enabled.is_some() {
            self.archive_enabled = other.archive_enabled;
        }
    }

    /// Merge multiple layers in precedence order (lowest to highest).
    #[must_use]
    pub fn merge_layers(layers: &[Self]) -> Self {
        let mut merged = Self::default();
        for layer in layers {
            merged.merge_from(layer);
        }
        merged
    }

    /// Build a layer from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    /// Build a layer from `(key, value)` pairs shaped like environment variables.
    ///
    /// Recognized keys: `BENCH_SUMMARY_CRITERION_DIR`, `BENCH_SUMMARY_ARCHIVE_DIR`
    /// and `BENCH_SUMMARY_NO_ARCHIVE`. Unparseable booleans are ignored.
    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut layer = Self::default();

        for (key, value) in vars {
            let Some(stripped) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.into();
            match normalize_key(stripped).as_str() {
                "criterion-dir" => layer.criterion_dir = Some(PathBuf::from(value)),
                "archive-dir" => layer.archive_dir = Some(PathBuf::from(value)),
                "no-archive" => {
                    if let Some(disabled) = parse_bool(&value) {
                        layer.archive_enabled = Some(!disabled);
                    }
                }
                _ => {}
            }
        }

        layer
    }
}

/// CLI overrides for config loading (optional).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub criterion_dir: Option<PathBuf>,
    pub archive_dir: Option<PathBuf>,
    pub no_archive: Option<bool>,
}

impl CliOverrides {
    #[must_use]
    pub fn as_layer(&self) -> ConfigLayer {
        ConfigLayer {
            criterion_dir: self.criterion_dir.clone(),
            archive_dir: self.archive_dir.clone(),
            // An absent flag must not re-enable archiving disabled via env.
            archive_enabled: self.no_archive.filter(|&no| no).map(|_| false),
        }
    }
}

fn non_empty_path(key: &str, path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(SummaryError::Config(format!("{key} must not be empty")));
    }
    Ok(path.to_path_buf())
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
