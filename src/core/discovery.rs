// LogSift - core/discovery.rs
//
// Non-recursive listing of the scan directory and selection of dated
// log files.
//
// Uses `walkdir` pinned to depth 1 for the listing. Reads only directory
// metadata, never file contents. A name that does not parse as a date is
// not an error: the entry is skipped and the scan carries on.
//
// Entry types are deliberately not checked. A directory named like
// `20240101.log` is returned as a candidate and fails later when the
// collector tries to read it.

use crate::core::date::parse_log_date;
use crate::core::model::LogFileEntry;
use crate::util::error::DiscoveryError;
use std::path::Path;

/// List `dir` (non-recursively) and return every entry named
/// `<YYYYMMDD>.<extension>`.
///
/// `extension` is compared without its leading dot and case-sensitively.
/// Results are sorted by date, then path, so repeated scans of the same
/// directory compare equal.
///
/// # Errors
/// `RootNotFound` / `NotADirectory` when `dir` is unusable, `Traversal` when
/// the listing itself fails part-way.
pub fn scan_dir(dir: &Path, extension: &str) -> Result<Vec<LogFileEntry>, DiscoveryError> {
    // Pre-flight: give a clear error for the two common mistakes before
    // walkdir reports them as generic traversal failures.
    match std::fs::metadata(dir) {
        Ok(meta) if !meta.is_dir() => {
            return Err(DiscoveryError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DiscoveryError::RootNotFound {
                path: dir.to_path_buf(),
            });
        }
        _ => {}
    }

    tracing::debug!(dir = %dir.display(), extension, "Discovery starting");

    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let mut files: Vec<LogFileEntry> = Vec::new();
    let mut listed = 0usize;

    for entry_result in walker {
        let entry = entry_result.map_err(|source| DiscoveryError::Traversal {
            path: dir.to_path_buf(),
            source,
        })?;
        listed += 1;

        let path = entry.path();
        if let Some(date) = dated_log_name(path, extension) {
            tracing::trace!(file = %path.display(), %date, "Dated log file");
            files.push(LogFileEntry::new(path.to_path_buf(), date));
        } else {
            tracing::trace!(file = %path.display(), "Not a dated log file");
        }
    }

    files.sort();

    tracing::debug!(
        listed,
        candidates = files.len(),
        "Discovery complete"
    );

    Ok(files)
}

/// Date encoded in `path`'s file name, if it is `<YYYYMMDD>.<extension>`.
///
/// Parse failures are swallowed here on purpose; see module docs.
fn dated_log_name(path: &Path, extension: &str) -> Option<chrono::NaiveDate> {
    if path.extension().and_then(|e| e.to_str()) != Some(extension) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    parse_log_date(stem).ok()
}
