//! Base error types for hookhub
//!
//! This module provides the foundation error types that all crates can use.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Hooks root unset, missing, or otherwise unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Enumerating the hooks root failed
    #[error("Failed to discover hooks in {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No hook with this name exists in the category (enabled or disabled)
    #[error("Hook '{name}' of type '{category}' not found")]
    HookNotFound { category: String, name: String },

    /// A progress entry was asked to move backwards or skip ahead
    #[error("Invalid progress transition for '{key}': {from} -> {to}")]
    InvalidTransition {
        key: String,
        from: &'static str,
        to: &'static str,
    },

    /// One or more hooks exited unsuccessfully
    #[error("{failed} of {total} hooks failed")]
    HooksFailed { failed: usize, total: usize },

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
