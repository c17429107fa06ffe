//! External sync validator
//!
//! The validator is an opaque script that prints a human-readable report.
//! Only two markers in its output carry meaning: `❌` for sync problems and
//! `✅` for a fully synced setup.

use serde::Serialize;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::{Result, SetupError};

/// Marker printed by the validator when something is out of sync
pub const NOT_SYNCED_MARKER: &str = "❌";

/// Marker printed by the validator when everything is in sync
pub const SYNCED_MARKER: &str = "✅";

/// Verdict derived from validator output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncVerdict {
    Synced,
    NotSynced,
    /// No marker found, or the validator did not run
    Unknown,
}

impl SyncVerdict {
    /// Classify validator output. A problem marker wins over a success marker.
    pub fn from_output(output: &str) -> Self {
        if output.contains(NOT_SYNCED_MARKER) {
            Self::NotSynced
        } else if output.contains(SYNCED_MARKER) {
            Self::Synced
        } else {
            Self::Unknown
        }
    }
}

impl std::fmt::Display for SyncVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Synced => write!(f, "synced"),
            Self::NotSynced => write!(f, "not synced"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Run the validator script and return stdout followed by stderr
///
/// A non-zero exit status is not an error: the output is still returned so
/// its markers can be inspected.
pub fn run_validator(script: &Path, working_dir: &Path) -> Result<String> {
    let output = Command::new(script)
        .current_dir(working_dir)
        .output()
        .map_err(|source| SetupError::Subprocess {
            command: script.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        debug!(script = %script.display(), status = %output.status, "validator exited with failure");
    }

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(text)
}

/// Run the validator, degrading any failure to empty output
pub fn capture_output(script: &Path, working_dir: &Path) -> String {
    run_validator(script, working_dir).unwrap_or_else(|err| {
        debug!("{err}");
        String::new()
    })
}
