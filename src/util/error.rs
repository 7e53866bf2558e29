// LogSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant carries the path or input it concerns so the top-level
// message is actionable without a backtrace.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogSift operations.
/// Errors are categorised by the pipeline stage that produced them.
#[derive(Debug)]
pub enum LogSiftError {
    /// A `--date_start` / `--date_end` boundary was missing or malformed.
    Boundary(BoundaryError),

    /// Listing the scan directory failed.
    Discovery(DiscoveryError),

    /// Reading a matched log file failed.
    Collect(CollectError),

    /// Writing the output file failed.
    Export(ExportError),

    /// Loading the config file failed.
    Config(ConfigError),
}

impl fmt::Display for LogSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boundary(e) => write!(f, "Date range error: {e}"),
            Self::Discovery(e) => write!(f, "Discovery error: {e}"),
            Self::Collect(e) => write!(f, "Read error: {e}"),
            Self::Export(e) => write!(f, "Write error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for LogSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Boundary(e) => Some(e),
            Self::Discovery(e) => Some(e),
            Self::Collect(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Date parse errors
// ---------------------------------------------------------------------------

/// A string is not a `YYYYMMDD` calendar date.
///
/// Carries no policy: the scanner discards it, boundary parsing propagates it.
#[derive(Debug, Clone, PartialEq)]
pub enum DateParseError {
    /// Not exactly eight ASCII digits.
    Malformed { input: String },

    /// Eight digits, but not a real calendar date (e.g. `20240230`).
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    /// A calendar date before year 1 (e.g. `00000101`).
    YearOutOfRange { input: String, year: i32 },
}

impl DateParseError {
    /// The rejected input string.
    pub fn input(&self) -> &str {
        match self {
            Self::Malformed { input }
            | Self::InvalidDate { input, .. }
            | Self::YearOutOfRange { input, .. } => input,
        }
    }
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input } => write!(
                f,
                "time data '{input}' does not match format '{}'",
                super::constants::LOG_DATE_FORMAT
            ),
            Self::InvalidDate { input, source } => {
                write!(f, "time data '{input}' is not a valid date: {source}")
            }
            Self::YearOutOfRange { input, year } => {
                write!(f, "time data '{input}': year {year} is out of range")
            }
        }
    }
}

impl std::error::Error for DateParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::Malformed { .. } | Self::YearOutOfRange { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Boundary errors
// ---------------------------------------------------------------------------

/// Errors raised while turning the raw range flags into a `DateRange`.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryError {
    /// The flag was not supplied.
    Missing { flag: &'static str },

    /// The flag was supplied but did not parse.
    Invalid {
        flag: &'static str,
        source: DateParseError,
    },
}

impl BoundaryError {
    /// Name of the offending flag (without leading dashes).
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Missing { flag } | Self::Invalid { flag, .. } => flag,
        }
    }
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { flag } => write!(f, "--{flag} is required"),
            // Only the underlying message: the CLI prefixes it with "Wrong ".
            Self::Invalid { source, .. } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for BoundaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            Self::Missing { .. } => None,
        }
    }
}

impl From<BoundaryError> for LogSiftError {
    fn from(e: BoundaryError) -> Self {
        Self::Boundary(e)
    }
}

// ---------------------------------------------------------------------------
// Discovery errors
// ---------------------------------------------------------------------------

/// Errors related to listing the scan directory.
#[derive(Debug)]
pub enum DiscoveryError {
    /// The scan directory does not exist or is not accessible.
    RootNotFound { path: PathBuf },

    /// The scan path is not a directory.
    NotADirectory { path: PathBuf },

    /// Walkdir failed while listing the directory.
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound { path } => {
                write!(f, "Scan path '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Scan path '{}' is not a directory", path.display())
            }
            Self::Traversal { path, source } => {
                write!(f, "Error listing '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Traversal { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DiscoveryError> for LogSiftError {
    fn from(e: DiscoveryError) -> Self {
        Self::Discovery(e)
    }
}

// ---------------------------------------------------------------------------
// Collect errors
// ---------------------------------------------------------------------------

/// Errors raised while reading matched log files.
#[derive(Debug)]
pub enum CollectError {
    /// The file could not be opened or read.
    Io { file: PathBuf, source: io::Error },

    /// The file is not valid UTF-8.
    InvalidEncoding { file: PathBuf, source: io::Error },
}

impl CollectError {
    /// Classify an I/O error from a line read against `file`.
    pub fn from_io(file: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            Self::InvalidEncoding { file, source }
        } else {
            Self::Io { file, source }
        }
    }
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { file, source } => {
                write!(f, "'{}': I/O error: {source}", file.display())
            }
            Self::InvalidEncoding { file, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", file.display())
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::InvalidEncoding { source, .. } => Some(source),
        }
    }
}

impl From<CollectError> for LogSiftError {
    fn from(e: CollectError) -> Self {
        Self::Collect(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing the output file.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error creating or writing the output file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Output I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for LogSiftError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for LogSiftError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LogSift results.
pub type Result<T> = std::result::Result<T, LogSiftError>;
