// LogSift - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr only. stdout and the output file never carry log lines.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive for the subscriber.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default.
fn resolve_filter(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if env_set {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the validated level from the config file (if any).
///
/// Must be called at most once per process; later calls are ignored.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = resolve_filter(std::env::var("RUST_LOG").is_ok(), debug_flag, config_level);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Logging initialised"
        );
    }
}
