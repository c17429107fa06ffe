//! Error types for setup operations
//!
//! | Variant | Raised when | Flow treatment |
//! |---------|-------------|----------------|
//! | [`SetupError::NotFound`] | a required source path is missing | tool skipped with a warning |
//! | [`SetupError::Io`] | directory creation or file copy fails | tool marked failed |
//! | [`SetupError::Subprocess`] | the validator cannot be spawned | treated as empty output |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for setup operations
pub type Result<T> = std::result::Result<T, SetupError>;

/// Errors raised while copying configuration or running the validator
#[derive(Error, Debug)]
pub enum SetupError {
    /// A required source path does not exist
    #[error("Source not found: {path}")]
    NotFound {
        /// The missing path
        path: PathBuf,
    },

    /// Filesystem failure at a specific path
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path being created or copied when the failure happened
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The validator process could not be started
    #[error("Failed to run {command}: {source}")]
    Subprocess {
        /// The executable that was invoked
        command: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SetupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means a source was missing rather than broken
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The path the error is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
            Self::Subprocess { command, .. } => command,
        }
    }
}
