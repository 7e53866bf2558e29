// LogSift - core/collector.rs
//
// Reads each matched log file and merges its lines into one set of
// distinct lines.
//
// Files are read one at a time, fully, in the order given. The first
// file that cannot be read aborts the whole collection: there is no
// skip-and-continue and no partial result.

use crate::core::model::{LineSet, LogFileEntry};
use crate::platform::fs::read_trimmed_lines;
use crate::util::constants::DEBUG_MAX_LINE_PREVIEW;
use crate::util::error::CollectError;

/// Collect the distinct lines of every file in `entries`.
///
/// Duplicates within one file and across files collapse to a single entry.
pub fn collect_unique_lines(entries: &[LogFileEntry]) -> Result<LineSet, CollectError> {
    let mut unique = LineSet::new();

    for entry in entries {
        let lines = read_trimmed_lines(&entry.path)
            .map_err(|source| CollectError::from_io(entry.path.clone(), source))?;

        let read = lines.len();
        let before = unique.len();
        for line in lines {
            if tracing::enabled!(tracing::Level::TRACE) {
                let preview: String = line.chars().take(DEBUG_MAX_LINE_PREVIEW).collect();
                tracing::trace!(file = %entry.path.display(), line = %preview, "Line read");
            }
            unique.insert(line);
        }

        tracing::debug!(
            file = %entry.path.display(),
            lines = read,
            new_unique = unique.len() - before,
            "Collected log file"
        );
    }

    tracing::debug!(
        files = entries.len(),
        unique_lines = unique.len(),
        "Line collection complete"
    );

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;

    fn write_log(dir: &Path, name: &str, content: &str) -> LogFileEntry {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        let stem = name.trim_end_matches(".log");
        let date = NaiveDate::parse_from_str(stem, "%Y%m%d").unwrap();
        LogFileEntry::new(path, date)
    }

    fn set(lines: &[&str]) -> LineSet {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_overlapping_lines_collapse() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            write_log(dir.path(), "20240101.log", "a\nb\n"),
            write_log(dir.path(), "20240102.log", "b\nc\n"),
        ];
        let lines = collect_unique_lines(&entries).unwrap();
        assert_eq!(lines, set(&["a", "b", "c"]));
    }

    #[test]
    fn test_repeats_within_and_across_files_collapse() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            write_log(dir.path(), "20240101.log", "dup\ndup\ndup\n"),
            write_log(dir.path(), "20240102.log", "dup\n"),
            write_log(dir.path(), "20240103.log", "dup\r\ndup  \n"),
        ];
        let lines = collect_unique_lines(&entries).unwrap();
        assert_eq!(lines, set(&["dup"]));
    }

    #[test]
    fn test_leading_whitespace_distinguishes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![write_log(dir.path(), "20240101.log", "x\n  x\n")];
        let lines = collect_unique_lines(&entries).unwrap();
        assert_eq!(lines, set(&["x", "  x"]));
    }

    #[test]
    fn test_order_of_files_does_not_matter() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_log(dir.path(), "20240101.log", "a\nb\n");
        let second = write_log(dir.path(), "20240102.log", "c\nb\n");

        let forward = collect_unique_lines(&[first.clone(), second.clone()]).unwrap();
        let backward = collect_unique_lines(&[second, first]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_old_mac_line_endings_split() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            write_log(dir.path(), "20240101.log", "a\rb\r"),
            write_log(dir.path(), "20240102.log", "b\nc\n"),
        ];
        let lines = collect_unique_lines(&entries).unwrap();
        assert_eq!(lines, set(&["a", "b", "c"]));
    }

    #[test]
    fn test_no_entries_yields_empty_set() {
        assert!(collect_unique_lines(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_log(dir.path(), "20240101.log", "a\n");
        let missing = LogFileEntry::new(
            dir.path().join("20240102.log"),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );

        let err = collect_unique_lines(&[good, missing]).unwrap_err();
        match err {
            CollectError::Io { file, .. } => assert!(file.ends_with("20240102.log")),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_entry_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("20240101.log");
        fs::create_dir(&path).unwrap();
        let entry = LogFileEntry::new(path, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert!(collect_unique_lines(&[entry]).is_err());
    }

    #[test]
    fn test_invalid_utf8_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("20240101.log");
        fs::write(&path, b"\xc3\x28\n").unwrap();
        let entry = LogFileEntry::new(path, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert!(matches!(
            collect_unique_lines(&[entry]),
            Err(CollectError::InvalidEncoding { .. })
        ));
    }
}
