//! Common types and utilities shared across commands
//!
//! This module provides the `RuntimeContext` that every command receives.

use hookhub_config::Config;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;

/// Runtime context for command execution
///
/// Holds the configuration after CLI overrides were applied, plus what is
/// needed to write it back (`configure`).
///
/// # Examples
///
/// ```ignore
/// let config = Config::load_or_default(&config_path)?;
/// let context = RuntimeContext::new(config, config_path, None);
/// let root = context.hooks_root()?;
/// ```
#[derive(Clone)]
pub struct RuntimeContext {
    /// Shared configuration (uses Arc to avoid cloning)
    pub config: Arc<Config>,
    /// File the configuration was loaded from (may not exist yet)
    pub config_path: PathBuf,
    /// Hooks root given on the command line, if any
    pub hooks_dir_override: Option<PathBuf>,
}

impl RuntimeContext {
    /// Create a new runtime context, applying the hooks root override
    pub fn new(config: Config, config_path: PathBuf, hooks_dir_override: Option<PathBuf>) -> Self {
        let config = config.with_hooks_dir(hooks_dir_override.clone());
        Self {
            config: Arc::new(config),
            config_path,
            hooks_dir_override,
        }
    }

    /// The hooks root hooks are discovered under
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no hooks root is configured
    pub fn hooks_root(&self) -> Result<&Path> {
        Ok(self.config.hooks_root()?)
    }

    /// Whether stdout is attached to a terminal
    #[inline]
    pub fn is_tty(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    /// Whether status icons should be drawn
    pub fn use_icons(&self) -> bool {
        self.config.ui.icons.should_show_icons(self.is_tty())
    }
}
