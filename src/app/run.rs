// LogSift - app/run.rs
//
// One batch run: parse the range, list the directory, filter by date,
// collect distinct lines, write the output file.
//
// Strictly sequential. The range is parsed before any filesystem access,
// so a bad boundary never touches the output file.

use crate::core::collector::collect_unique_lines;
use crate::core::discovery::scan_dir;
use crate::core::export::write_output_file;
use crate::core::filter::filter_by_range;
use crate::core::model::{DateRange, RunSummary};
use crate::platform::config::AppConfig;
use crate::util::error::Result;
use std::path::PathBuf;

/// Everything a run needs, already resolved from CLI, config and defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Raw `--date_start` value; `None` when the flag was omitted.
    pub date_start: Option<String>,
    /// Raw `--date_end` value; `None` when the flag was omitted.
    pub date_end: Option<String>,
    /// Directory to scan (non-recursively).
    pub scan_dir: PathBuf,
    /// Log file extension, without the dot.
    pub extension: String,
    /// Output file; truncated and rewritten on every successful read phase.
    pub output: PathBuf,
}

impl RunConfig {
    /// Build a run from the validated config file values and the raw range.
    pub fn from_app_config(
        config: &AppConfig,
        date_start: Option<String>,
        date_end: Option<String>,
    ) -> Self {
        Self {
            date_start,
            date_end,
            scan_dir: config.scan_dir.clone(),
            extension: config.extension.clone(),
            output: config.output_file.clone(),
        }
    }
}

/// Execute the whole pipeline.
///
/// # Errors
/// The first failure of any stage aborts the run. Boundary errors occur
/// before any I/O; read errors occur before the output file is opened.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let range = DateRange::parse(config.date_start.as_deref(), config.date_end.as_deref())?;
    tracing::debug!(start = %range.start, end = %range.end, "Date range parsed");

    let candidates = scan_dir(&config.scan_dir, &config.extension)?;
    let candidate_count = candidates.len();

    let matched = filter_by_range(candidates, &range);
    let lines = collect_unique_lines(&matched)?;
    let written = write_output_file(&config.output, &lines)?;

    let summary = RunSummary {
        candidates: candidate_count,
        matched: matched.len(),
        unique_lines: written,
        output: config.output.clone(),
    };

    tracing::info!(
        candidates = summary.candidates,
        matched = summary.matched,
        unique_lines = summary.unique_lines,
        output = %summary.output.display(),
        "Run complete"
    );

    Ok(summary)
}
