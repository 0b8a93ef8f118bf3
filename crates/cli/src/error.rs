//! Error types for CLI commands
//!
//! Structured errors for failures the CLI reports itself. Engine and
//! configuration errors are carried through `Core`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Shim script could not be written
    #[error("Failed to write git hook shim {}", path.display())]
    ShimWrite {
        /// Shim path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error from the engine or configuration layer
    #[error(transparent)]
    Core(#[from] hookhub_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
