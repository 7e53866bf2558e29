// LogSift - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogSift";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line description shown by `--help`.
pub const APP_ABOUT: &str = "Finding log files in a directory between two dates";

// =============================================================================
// Log file naming
// =============================================================================

/// Extension (without the leading dot) a file must carry to be a candidate.
pub const DEFAULT_LOG_EXTENSION: &str = "log";

/// `chrono` format of a log file stem and of both range boundaries.
pub const LOG_DATE_FORMAT: &str = "%Y%m%d";

/// Exact shape of a dated stem: eight ASCII digits, no separators.
pub const LOG_DATE_PATTERN: &str = r"^[0-9]{8}$";

/// Earliest year a log date may carry.
pub const MIN_LOG_YEAR: i32 = 1;

// =============================================================================
// Scan / output defaults
// =============================================================================

/// Directory scanned when neither `--dir` nor `[scan] directory` is given.
pub const DEFAULT_SCAN_DIR: &str = ".";

/// Output file written when neither `--output` nor `[output] file` is given.
/// Relative paths resolve against the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "temp.txt";

// =============================================================================
// CLI flag names
// =============================================================================

/// Long flag carrying the inclusive start of the date range.
pub const FLAG_DATE_START: &str = "date_start";

/// Long flag carrying the inclusive end of the date range.
pub const FLAG_DATE_END: &str = "date_end";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither `RUST_LOG`, `--debug` nor config sets one.
/// Kept at `warn` so a normal run prints nothing to stderr.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted by `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in trace output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;
