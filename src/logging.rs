//! Logging setup.
//!
//! Diagnostics go to stderr (or a log file) so stdout carries only the
//! report. `RUST_LOG` takes precedence over the verbosity flags.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

static TEST_INIT: Once = Once::new();

/// Map `-v`/`-q` flags to a default filter directive.
#[must_use]
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init_logging(
    verbose: u8,
    quiet: bool,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init()?;
        }
        None => builder.with_writer(std::io::stderr).try_init()?,
    }

    Ok(())
}

/// Install a test-writer subscriber once per process.
pub fn init_test_logging() {
    TEST_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}
