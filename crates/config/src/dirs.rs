//! XDG directory utilities
//!
//! This module provides XDG-compliant directory paths for hookhub.
//! It follows the XDG Base Directory specification using the `xdg` crate:
//! - `XDG_CONFIG_HOME` defaults to ~/.config
//! - `XDG_DATA_HOME` defaults to ~/.local/share

use std::path::PathBuf;
use xdg::BaseDirectories;

/// Get the hookhub config directory
///
/// Returns `$XDG_CONFIG_HOME/hookhub` or `~/.config/hookhub`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    BaseDirectories::with_prefix("hookhub").get_config_home()
}

/// Get the hookhub data directory
///
/// Returns `$XDG_DATA_HOME/hookhub` or `~/.local/share/hookhub`
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    BaseDirectories::with_prefix("hookhub").get_data_home()
}

/// Default config file path (`<config_dir>/config.toml`)
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Default hooks root (`<config_dir>/hooks`)
#[must_use]
pub fn default_hooks_dir() -> Option<PathBuf> {
    config_dir().map(|d| d.join("hooks"))
}

/// Directory git is pointed at via `core.hooksPath` (`<data_dir>/git-hooks`)
#[must_use]
pub fn default_git_hooks_dir() -> Option<PathBuf> {
    data_dir().map(|d| d.join("git-hooks"))
}
