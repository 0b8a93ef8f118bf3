//! Configuration management for hookhub
//!
//! This crate handles:
//! - Configuration loading and saving
//! - XDG directory management
//! - Git `core.hooksPath` wiring
//! - Logging initialization

pub mod config;
pub mod dirs;
pub mod git;
pub mod logging;

// Re-export error types from core
pub use hookhub_core::{Error, Result};

// Re-export main types
pub use config::{Config, IconMode, ReportOrder, RunConfig, UiConfig, expand_tilde};
pub use crate::dirs::{config_dir, data_dir, default_config_file, default_hooks_dir};
