//! Configuration management
//!
//! This module handles loading and saving hookhub configuration.

use crate::Result;
use hookhub_core::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Icon display mode (similar to eza's --icons option)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Automatically show icons when output is a terminal
    #[default]
    #[serde(alias = "automatic")]
    Auto,
    /// Always show icons
    Always,
    /// Never show icons
    Never,
}

impl IconMode {
    /// Determine if icons should be shown based on mode and terminal detection
    #[must_use]
    pub fn should_show_icons(&self, is_tty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_tty,
        }
    }
}

/// Order in which failure blocks are reported after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportOrder {
    /// Order in which hooks finished (varies between runs)
    #[default]
    Arrival,
    /// Order in which hooks were discovered (stable)
    Discovery,
}

/// Hook execution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Upper bound on hooks running at once (defaults to available CPUs)
    #[serde(default, rename = "maxParallel", skip_serializing_if = "Option::is_none")]
    pub max_parallel: Option<usize>,

    /// Per-hook deadline in seconds, 0 disables it
    #[serde(default = "default_timeout_secs", rename = "timeoutSecs")]
    pub timeout_secs: u64,

    /// Failure report ordering
    #[serde(default, rename = "reportOrder")]
    pub report_order: ReportOrder,
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_parallel: None,
            timeout_secs: default_timeout_secs(),
            report_order: ReportOrder::default(),
        }
    }
}

impl RunConfig {
    /// Worker pool size actually used, never below one
    #[must_use]
    pub fn parallelism(&self) -> usize {
        self.max_parallel
            .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, usize::from))
            .max(1)
    }

    /// Per-hook deadline, `None` when disabled
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// UI configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Icon display mode: "auto", "always", or "never"
    #[serde(default)]
    pub icons: IconMode,

    /// Show per-hook progress spinners
    #[serde(default = "default_progress")]
    pub progress: bool,
}

fn default_progress() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            progress: default_progress(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding one subdirectory per hook category
    #[serde(default, rename = "hooksDir", skip_serializing_if = "Option::is_none")]
    pub hooks_dir: Option<PathBuf>,

    /// Execution settings
    #[serde(default)]
    pub run: RunConfig,

    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// `~` in `hooksDir` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(toml_content)
            .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

        config.hooks_dir = config.hooks_dir.map(|dir| expand_tilde(&dir));
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Override the hooks root (e.g. from a CLI flag)
    #[must_use]
    pub fn with_hooks_dir(mut self, hooks_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = hooks_dir {
            self.hooks_dir = Some(expand_tilde(&dir));
        }
        self
    }

    /// Get the configured hooks root
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no hooks root is set
    pub fn hooks_root(&self) -> Result<&Path> {
        self.hooks_dir.as_deref().ok_or_else(|| {
            Error::Config(
                "hooks directory not set. Run 'hookhub configure' first".to_string(),
            )
        })
    }
}

/// Expand a leading `~` to the home directory
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if !path.as_os_str().as_encoded_bytes().starts_with(b"~") {
        return path.to_path_buf();
    }

    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };

    match path.to_str() {
        Some("~") => home,
        Some(s) if s.starts_with("~/") => home.join(&s[2..]),
        _ => path.to_path_buf(),
    }
}
