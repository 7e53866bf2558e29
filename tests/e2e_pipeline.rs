// LogSift - tests/e2e_pipeline.rs
//
// End-to-end tests for the scan -> filter -> collect -> write pipeline.
//
// These exercise the real filesystem through `tempfile` directories,
// real walkdir listing and real chrono date parsing. No mocks.

use logsift::app::run::{run, RunConfig};
use logsift::core::collector::collect_unique_lines;
use logsift::core::discovery::scan_dir;
use logsift::core::filter::filter_by_range;
use logsift::core::model::DateRange;
use logsift::util::error::{BoundaryError, LogSiftError};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

// =============================================================================
// Helpers
// =============================================================================

/// Two overlapping dated logs plus noise that must never be picked up.
fn seed_scenario(root: &Path) {
    fs::write(root.join("20240101.log"), "a\nb\n").unwrap();
    fs::write(root.join("20240102.log"), "b\nc\n").unwrap();
    fs::write(root.join("readme.log"), "not a dated log\n").unwrap();
    fs::write(root.join("20240101.txt"), "wrong extension\n").unwrap();
}

fn run_range(root: &Path, start: &str, end: &str) -> logsift::util::error::Result<String> {
    let config = RunConfig {
        date_start: Some(start.to_string()),
        date_end: Some(end.to_string()),
        scan_dir: root.to_path_buf(),
        extension: "log".to_string(),
        output: root.join("temp.txt"),
    };
    run(&config)?;
    Ok(fs::read_to_string(root.join("temp.txt")).unwrap())
}

fn line_set(content: &str) -> BTreeSet<&str> {
    content.lines().collect()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Overlapping lines across two files appear once each.
#[test]
fn e2e_overlapping_files_are_deduplicated() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());

    let output = run_range(dir.path(), "20240101", "20240102").unwrap();

    assert_eq!(output.lines().count(), 3, "output: {output:?}");
    assert_eq!(line_set(&output), BTreeSet::from(["a", "b", "c"]));
    assert!(output.ends_with('\n'));
}

/// A range that matches no file still writes an empty output file.
#[test]
fn e2e_empty_range_writes_zero_byte_file() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());

    let output = run_range(dir.path(), "20240103", "20240105").unwrap();
    assert!(output.is_empty());
    assert_eq!(fs::metadata(dir.path().join("temp.txt")).unwrap().len(), 0);
}

/// An inverted range is accepted and matches nothing.
#[test]
fn e2e_inverted_range_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());

    let output = run_range(dir.path(), "20240102", "20240101").unwrap();
    assert!(output.is_empty());
}

/// Boundary dates that name existing files are included.
#[test]
fn e2e_single_day_range_includes_boundary_file() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());

    let output = run_range(dir.path(), "20240102", "20240102").unwrap();
    assert_eq!(line_set(&output), BTreeSet::from(["b", "c"]));
}

/// A malformed boundary fails before any output is written.
#[test]
fn e2e_malformed_boundary_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());

    let err = run_range(dir.path(), "2024-01-01", "20240102").unwrap_err();
    match err {
        LogSiftError::Boundary(BoundaryError::Invalid { flag, .. }) => {
            assert_eq!(flag, "date_start");
        }
        other => panic!("expected boundary error, got {other:?}"),
    }
    assert!(!dir.path().join("temp.txt").exists());
}

/// A second run fully replaces the previous output.
#[test]
fn e2e_rerun_overwrites_output() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());

    run_range(dir.path(), "20240101", "20240102").unwrap();
    let output = run_range(dir.path(), "20240101", "20240101").unwrap();
    assert_eq!(line_set(&output), BTreeSet::from(["a", "b"]));
    assert_eq!(output.lines().count(), 2);
}

/// The output file itself is never mistaken for an input.
#[test]
fn e2e_output_in_scan_dir_is_not_an_input() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());
    fs::write(dir.path().join("temp.txt"), "left over\n").unwrap();

    let output = run_range(dir.path(), "20240101", "20240102").unwrap();
    assert!(!output.contains("left over"));
}

// =============================================================================
// Stage properties
// =============================================================================

/// Only names of the form YYYYMMDD.log become candidates.
#[test]
fn e2e_only_dated_logs_are_candidates() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());
    fs::write(dir.path().join("20240230.log"), "impossible date\n").unwrap();
    fs::write(dir.path().join("2024011.log"), "short name\n").unwrap();

    let files = scan_dir(dir.path(), "log").unwrap();
    let names: Vec<String> = files.iter().map(|f| f.file_name()).collect();
    assert_eq!(names, vec!["20240101.log", "20240102.log"]);
}

/// Scanning an unchanged directory twice gives the same entries.
#[test]
fn e2e_scan_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    seed_scenario(dir.path());

    let first: BTreeSet<_> = scan_dir(dir.path(), "log").unwrap().into_iter().collect();
    let second: BTreeSet<_> = scan_dir(dir.path(), "log").unwrap().into_iter().collect();
    assert_eq!(first, second);
}

/// Pairwise-distinct input lines come out unchanged and complete.
#[test]
fn e2e_distinct_lines_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut expected = BTreeSet::new();
    for day in 1..=9 {
        let body: String = (0..5)
            .map(|i| {
                let line = format!("day {day} event {i}");
                expected.insert(line.clone());
                line + "\n"
            })
            .collect();
        fs::write(dir.path().join(format!("202403{day:02}.log")), body).unwrap();
    }

    let output = run_range(dir.path(), "20240301", "20240331").unwrap();
    let got: BTreeSet<String> = output.lines().map(str::to_string).collect();
    assert_eq!(got, expected);
    assert_eq!(output.lines().count(), expected.len());
}

/// N copies of one line over M files still yield one line.
#[test]
fn e2e_repeated_line_across_many_files() {
    let dir = tempfile::tempdir().unwrap();
    for day in 1..=7 {
        fs::write(
            dir.path().join(format!("202405{day:02}.log")),
            "heartbeat\nheartbeat\n",
        )
        .unwrap();
    }

    let files = scan_dir(dir.path(), "log").unwrap();
    let range = DateRange::parse(Some("20240501"), Some("20240507")).unwrap();
    let matched = filter_by_range(files, &range);
    assert_eq!(matched.len(), 7);

    let lines = collect_unique_lines(&matched).unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines.contains("heartbeat"));
}
