//! Git configuration wiring
//!
//! hookhub takes over git hook dispatch by pointing the global
//! `core.hooksPath` at a directory of shim scripts. This module reads and
//! writes that setting through libgit2.

use crate::Result;
use hookhub_core::Error;
use std::path::{Path, PathBuf};

const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// Helper function to convert git2 errors to hookhub errors
#[inline]
fn git_err(e: git2::Error) -> Error {
    Error::Message(format!("Git error: {e}"))
}

/// Locate the global git config file, falling back to `~/.gitconfig`
fn global_config_path() -> Result<PathBuf> {
    if let Ok(path) = git2::Config::find_global() {
        return Ok(path);
    }

    dirs::home_dir()
        .map(|home| home.join(".gitconfig"))
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

/// Point the global `core.hooksPath` at `hooks_dir`
pub fn set_global_hooks_path(hooks_dir: &Path) -> Result<()> {
    let config_path = global_config_path()?;
    set_hooks_path_in(&config_path, hooks_dir)
}

/// Write `core.hooksPath` into a specific git config file
pub fn set_hooks_path_in(config_file: &Path, hooks_dir: &Path) -> Result<()> {
    let mut config = git2::Config::open(config_file).map_err(git_err)?;
    let value = hooks_dir.to_str().ok_or_else(|| {
        Error::Config(format!(
            "Hooks path is not valid UTF-8: {}",
            hooks_dir.display()
        ))
    })?;

    config.set_str(HOOKS_PATH_KEY, value).map_err(git_err)?;
    tracing::debug!(
        "Set {} = {} in {}",
        HOOKS_PATH_KEY,
        value,
        config_file.display()
    );
    Ok(())
}

/// Read `core.hooksPath` from a specific git config file
pub fn hooks_path_in(config_file: &Path) -> Result<Option<PathBuf>> {
    let config = git2::Config::open(config_file).map_err(git_err)?;
    match config.get_path(HOOKS_PATH_KEY) {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(git_err(e)),
    }
}

/// Read the effective `core.hooksPath` from the user's git configuration
pub fn global_hooks_path() -> Result<Option<PathBuf>> {
    hooks_path_in(&global_config_path()?)
}
