// LogSift - platform/config.rs
//
// Optional config.toml loading with startup validation.
//
// The file is only ever read when named explicitly with `--config`; a run
// without it uses the built-in defaults and touches no config file.

use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::{Path, PathBuf};

// =============================================================================
// Raw file shape
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[scan]` section.
    pub scan: ScanSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[scan]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Directory holding the dated log files.
    pub directory: Option<String>,
    /// Log file extension, without the dot.
    pub extension: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Output file path.
    pub file: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

// =============================================================================
// Validated config
// =============================================================================

/// Validated application configuration.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory to scan.
    pub scan_dir: PathBuf,
    /// Log file extension, without the dot.
    pub extension: String,
    /// Output file path.
    pub output_file: PathBuf,
    /// Logging level string (applied before tracing is initialised).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scan_dir: PathBuf::from(constants::DEFAULT_SCAN_DIR),
            extension: constants::DEFAULT_LOG_EXTENSION.to_string(),
            output_file: PathBuf::from(constants::DEFAULT_OUTPUT_FILE),
            log_level: None,
        }
    }
}

/// Load and validate the config file at `path`.
///
/// Returns the validated config plus non-fatal warnings for values that were
/// rejected. A file that cannot be read or parsed is an error: the user asked
/// for it by name.
///
/// Runs before logging is initialised, so warnings are returned rather than
/// logged; the caller reports them once tracing is up.
pub fn load_config(path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(validate(raw))
}

/// Turn the raw file contents into an `AppConfig`, accumulating all warnings.
fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Scan: directory --
    if let Some(dir) = raw.scan.directory {
        if dir.trim().is_empty() {
            warnings.push(format!(
                "[scan] directory is empty. Using default (\"{}\").",
                constants::DEFAULT_SCAN_DIR
            ));
        } else {
            config.scan_dir = PathBuf::from(dir);
        }
    }

    // -- Scan: extension --
    if let Some(ext) = raw.scan.extension {
        if is_valid_extension(&ext) {
            config.extension = ext;
        } else {
            warnings.push(format!(
                "[scan] extension = \"{ext}\" must be non-empty without dots or path \
                 separators (e.g. \"log\"). Using default (\"{}\").",
                constants::DEFAULT_LOG_EXTENSION
            ));
        }
    }

    // -- Output: file --
    if let Some(file) = raw.output.file {
        if file.trim().is_empty() {
            warnings.push(format!(
                "[output] file is empty. Using default (\"{}\").",
                constants::DEFAULT_OUTPUT_FILE
            ));
        } else {
            config.output_file = PathBuf::from(file);
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL
            ));
        }
    }

    (config, warnings)
}

fn is_valid_extension(ext: &str) -> bool {
    !ext.is_empty() && !ext.contains(['.', '/', '\\']) && !ext.chars().any(char::is_whitespace)
}
