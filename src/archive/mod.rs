//! Dated, sequence-numbered report archives.
//!
//! Archives are named `<YYYY-MM-DD>-<NNN>.md`. The counter continues from
//! the highest one already present for the day; gaps left by deleted files
//! are not reused. Files are opened with create-new semantics, so an
//! existing archive is never overwritten even if another process claims
//! the same counter first.

use crate::error::{Result, SummaryError};
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Extension of archive files.
pub const ARCHIVE_EXTENSION: &str = "md";

static ARCHIVE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})-(\d{3,})\.md$").expect("archive name regex")
});

/// A file already present in the archive directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub counter: u32,
}

/// Parse `<date>-<counter>.md`; anything else is not an archive.
#[must_use]
pub fn parse_archive_name(name: &str) -> Option<(NaiveDate, u32)> {
    let caps = ARCHIVE_NAME_RE.captures(name)?;
    let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()?;
    let counter = caps[2].parse().ok()?;
    Some((date, counter))
}

/// File name for a given date and counter, e.g. `2024-01-01-003.md`.
#[must_use]
pub fn archive_file_name(date: NaiveDate, counter: u32) -> String {
    format!("{}-{counter:03}.{ARCHIVE_EXTENSION}", date.format("%Y-%m-%d"))
}

/// Writes reports into one archive directory.
#[derive(Debug, Clone)]
pub struct ArchiveWriter {
    dir: PathBuf,
}

impl ArchiveWriter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List archives in the directory, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn list(&self) -> Result<Vec<ArchiveEntry>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some((date, counter)) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(parse_archive_name)
            else {
                continue;
            };
            entries.push(ArchiveEntry {
                path,
                date,
                counter,
            });
        }

        entries.sort_by(|a, b| (a.date, a.counter).cmp(&(b.date, b.counter)));
        Ok(entries)
    }

    /// Counter the next archive for `date` will use.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn next_counter(&self, date: NaiveDate) -> Result<u32> {
        let max = self
            .list()?
            .into_iter()
            .filter(|entry| entry.date == date)
            .map(|entry| entry.counter)
            .max();
        Ok(max.map_or(1, |counter| counter.saturating_add(1)))
    }

    /// Path the next archive for `date` will be written to.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn next_path(&self, date: NaiveDate) -> Result<PathBuf> {
        Ok(self.dir.join(archive_file_name(date, self.next_counter(date)?)))
    }

    /// Write `content` as today's next archive.
    ///
    /// # Errors
    ///
    /// See [`ArchiveWriter::write_for_date`].
    pub fn write(&self, content: &str) -> Result<PathBuf> {
        self.write_for_date(content, Local::now().date_naive())
    }

    /// Write `content` as the next archive for `date` and return its path.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::ArchiveWrite`] if the directory cannot be
    /// created or the file cannot be written.
    pub fn write_for_date(&self, content: &str, date: NaiveDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| SummaryError::ArchiveWrite {
            path: self.dir.clone(),
            source,
        })?;

        let mut counter = self.next_counter(date)?;
        loop {
            let path = self.dir.join(archive_file_name(date, counter));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(content.as_bytes())
                        .map_err(|source| SummaryError::ArchiveWrite {
                            path: path.clone(),
                            source,
                        })?;
                    tracing::info!("Wrote archive {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists && counter < u32::MAX => {
                    tracing::debug!("Archive {} appeared concurrently; retrying", path.display());
                    counter += 1;
                }
                Err(source) => return Err(SummaryError::ArchiveWrite { path, source }),
            }
        }
    }
}
