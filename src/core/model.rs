// LogSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// All values are transient: built fresh each run and dropped once the
// output file is written.

use crate::core::date::parse_log_date;
use crate::util::constants::{FLAG_DATE_END, FLAG_DATE_START};
use crate::util::error::BoundaryError;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::PathBuf;

// =============================================================================
// Log file entry
// =============================================================================

/// A candidate log file: its path and the date its name encodes.
///
/// Only produced by discovery for names of the form `<YYYYMMDD>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogFileEntry {
    /// Calendar date parsed from the file stem.
    pub date: NaiveDate,

    /// Path to the file (scan directory joined with the file name).
    pub path: PathBuf,
}

impl LogFileEntry {
    pub fn new(path: PathBuf, date: NaiveDate) -> Self {
        Self { date, path }
    }

    /// File name for display; falls back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// =============================================================================
// Date range
// =============================================================================

/// Inclusive `[start, end]` range of calendar dates.
///
/// `start > end` is allowed and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both raw boundaries. Start is checked before end, so the error
    /// always names the first bad flag.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, BoundaryError> {
        let start = parse_boundary(FLAG_DATE_START, start)?;
        let end = parse_boundary(FLAG_DATE_END, end)?;
        Ok(Self::new(start, end))
    }

    /// True when `start <= date <= end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when no date can fall inside the range.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

fn parse_boundary(flag: &'static str, raw: Option<&str>) -> Result<NaiveDate, BoundaryError> {
    let raw = raw.ok_or(BoundaryError::Missing { flag })?;
    parse_log_date(raw).map_err(|source| BoundaryError::Invalid { flag, source })
}

// =============================================================================
// Line set
// =============================================================================

/// Distinct lines gathered across all matched files.
///
/// Ordered so the output file is reproducible for a given input.
pub type LineSet = BTreeSet<String>;

// =============================================================================
// Run summary
// =============================================================================

/// What a completed run did. Returned by `app::run::run` and logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Dated log files found in the scan directory.
    pub candidates: usize,

    /// Candidates whose date fell inside the range.
    pub matched: usize,

    /// Distinct lines written to the output file.
    pub unique_lines: usize,

    /// Output file that was written.
    pub output: PathBuf,
}
