// LogSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Optional config file loading
// 3. Logging initialisation (debug mode support)
// 4. Running the pipeline and mapping its outcome to an exit status

use clap::Parser;
use logsift::app::run::{run, RunConfig};
use logsift::platform::config::{load_config, AppConfig};
use logsift::util::{self, error::LogSiftError};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line flags; `--help` shows `APP_ABOUT` as the description.
#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    version,
    about = util::constants::APP_ABOUT,
    long_about = None
)]
struct Cli {
    /// First date argument start (inclusive), YYYYMMDD.
    #[arg(long = "date_start", value_name = "YYYYMMDD")]
    date_start: Option<String>,

    /// Second date argument end (inclusive), YYYYMMDD.
    #[arg(long = "date_end", value_name = "YYYYMMDD")]
    date_end: Option<String>,

    /// Directory to scan [default: current directory].
    #[arg(long = "dir", value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Output file [default: temp.txt].
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// TOML config file with [scan], [output] and [logging] sections.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can apply.
    let (app_config, config_warnings) = match cli.config.as_deref() {
        Some(path) => match load_config(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                util::logging::init(cli.debug, None);
                return report(&LogSiftError::Config(e));
            }
        },
        None => (AppConfig::default(), Vec::new()),
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    tracing::debug!(version = util::constants::APP_VERSION, "App startup");

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // CLI flags override config values, which override built-in defaults.
    let mut run_config = RunConfig::from_app_config(&app_config, cli.date_start, cli.date_end);
    if let Some(dir) = cli.dir {
        run_config.scan_dir = dir;
    }
    if let Some(output) = cli.output {
        run_config.output = output;
    }

    let status = match run(&run_config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    };

    tracing::debug!("App shutdown");
    status
}

/// Print a fatal error to stderr and return the failure status.
///
/// Range errors use the `Wrong <message>` form; everything else `Error: ...`.
fn report(err: &LogSiftError) -> ExitCode {
    tracing::debug!(error = ?err, "Run failed");
    match err {
        LogSiftError::Boundary(e) => eprintln!("Wrong {e}"),
        other => eprintln!("Error: {other}"),
    }
    ExitCode::FAILURE
}
