// LogSift - core/filter.rs
//
// Date range filter over discovered log files.
// Core layer: pure logic, no I/O.

use crate::core::model::{DateRange, LogFileEntry};

/// Keep the entries whose date lies inside `range` (inclusive both ends).
///
/// Input order is preserved.
pub fn filter_by_range(entries: Vec<LogFileEntry>, range: &DateRange) -> Vec<LogFileEntry> {
    if range.is_empty() {
        tracing::debug!(
            start = %range.start,
            end = %range.end,
            "Date range start is after end; nothing can match"
        );
        return Vec::new();
    }

    let total = entries.len();
    let kept: Vec<LogFileEntry> = entries
        .into_iter()
        .filter(|entry| range.contains(entry.date))
        .collect();

    tracing::debug!(
        start = %range.start,
        end = %range.end,
        total,
        kept = kept.len(),
        "Date range filter applied"
    );

    kept
}
