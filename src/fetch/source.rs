//! Shipment sources: where the shipment list comes from.
//!
//! A source is either a JSON file on disk or a command whose stdout is
//! the JSON payload (e.g. `curl -s https://.../shipments`). Either way the
//! payload is an array of shipment records, parsed all-or-nothing.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use serde::Deserialize;

use crate::model::Shipment;

/// Where to fetch shipments from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// Read a JSON array from this file.
    File(PathBuf),

    /// Run this program (first element) with arguments and parse its stdout.
    Command(Vec<String>),
}

/// Errors that can occur while fetching shipments.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("source command is empty")]
    EmptyCommand,

    #[error("failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("invalid shipment payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fetch stopped without producing a result")]
    Disconnected,
}

/// Fetch the full shipment list from `source`.
///
/// One malformed record fails the whole fetch; there are no partial results.
pub fn fetch(source: &Source) -> Result<Vec<Shipment>, FetchError> {
    let payload = match source {
        Source::File(path) => fs::read(path).map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        })?,
        Source::Command(command) => run(command)?,
    };

    Ok(serde_json::from_slice(&payload)?)
}

/// Run a command and return its stdout.
fn run(command: &[String]) -> Result<Vec<u8>, FetchError> {
    let (program, args) = command.split_first().ok_or(FetchError::EmptyCommand)?;

    tracing::debug!(%program, ?args, "running source command");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| FetchError::Spawn {
            program: program.clone(),
            source,
        })?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(FetchError::CommandFailed {
            program: program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
