//! Log setup.
//!
//! Logs go to `docket.log` in the Docket home directory so the terminal UI
//! is never written over. `DOCKET_LOG` takes precedence over the configured
//! filter.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "DOCKET_LOG";

/// Install the global subscriber, appending to `<dir>/docket.log`.
pub fn init(default_filter: &str, dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("failed to create {}: {e}", dir.display()))?;

    let path = dir.join("docket.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("failed to open {}: {e}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| format!("invalid log filter '{default_filter}': {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| format!("failed to install logger: {e}"))?;

    tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
