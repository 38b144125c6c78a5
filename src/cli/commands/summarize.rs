//! Summarize command implementation.
//!
//! Collects Criterion results, prints the Markdown report once and stores
//! the same text as the next archive for today.

use crate::archive::ArchiveWriter;
use crate::collect::collect_results;
use crate::config::{CliOverrides, ReportConfig};
use crate::error::{Result, SummaryError};
use crate::report::Report;
use chrono::{Local, NaiveDate};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: String,
    pub archive_path: Option<PathBuf>,
    pub skipped: usize,
}

/// Execute the summarize command against stdout with today's date.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the Criterion directory
/// is missing or empty, or the archive cannot be written.
pub fn execute(cli: &CliOverrides) -> Result<()> {
    let config = ReportConfig::load(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out, Local::now().date_naive())?;
    Ok(())
}

/// Run the whole pipeline, writing the report and confirmation to `out`.
///
/// Nothing is printed or archived when collection fails or finds nothing.
///
/// # Errors
///
/// Returns [`SummaryError::CriterionDirNotFound`], [`SummaryError::NoResults`],
/// [`SummaryError::ArchiveWrite`], or an I/O error writing to `out`.
pub fn run<W: Write>(config: &ReportConfig, out: &mut W, date: NaiveDate) -> Result<RunOutcome> {
    let collection = collect_results(&config.criterion_dir)?;
    if collection.results.is_empty() {
        return Err(SummaryError::NoResults {
            path: config.criterion_dir.clone(),
        });
    }
    if !collection.skipped.is_empty() {
        debug!(
            skipped = collection.skipped.len(),
            "Some benchmark leaves had no usable estimate"
        );
    }

    let report = Report::build(&collection.results, &config.title, &config.families).render();
    out.write_all(report.as_bytes())?;
    out.flush()?;

    let archive_path = if config.archive_enabled {
        let path = ArchiveWriter::new(&config.archive_dir).write_for_date(&report, date)?;
        writeln!(out, "\nWrote archive to {}", path.display())?;
        Some(path)
    } else {
        info!("Archiving disabled; report not persisted");
        None
    };

    Ok(RunOutcome {
        report,
        archive_path,
        skipped: collection.skipped.len(),
    })
}
