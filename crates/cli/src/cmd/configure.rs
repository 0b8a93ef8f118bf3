//! Configure command implementation
//!
//! Writes the config file, creates the hooks root and installs the git hook
//! shims that dispatch into `hookhub run`.

use anyhow::{Context, anyhow};
use clap::Args;
use hookhub_config::{Config, git};
use hookhub_core::HookCategory;
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};
use crate::ui::StatusIcon;

/// Categories that get a shim in the git hooks directory
pub const SHIM_CATEGORIES: [HookCategory; 2] = [HookCategory::PreCommit, HookCategory::CommitMsg];

/// Set up hookhub and point git at it
#[derive(Debug, Args)]
pub struct ConfigureCommand {
    /// Overwrite an existing configuration with defaults
    #[arg(long)]
    pub reset: bool,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,
}

/// What `configure` produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    /// Hooks root written to the config file
    pub hooks_dir: PathBuf,
    /// Directory holding the git shims
    pub shim_dir: PathBuf,
}

impl Command for ConfigureCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let use_nerd_fonts = context.use_icons();

        if self.reset && context.config_path.exists() && !self.yes {
            use dialoguer::{Confirm, theme::ColorfulTheme};

            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!(
                    "Reset configuration at {}?",
                    context.config_path.display()
                ))
                .default(false)
                .interact()
                .context("Failed to read confirmation")?;

            if !confirmed {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let base = if self.reset {
            Config::default().with_hooks_dir(context.hooks_dir_override.clone())
        } else {
            (*context.config).clone()
        };

        let default_hooks_dir = hookhub_config::default_hooks_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        let shim_dir = hookhub_config::dirs::default_git_hooks_dir()
            .ok_or_else(|| anyhow!("Could not determine data directory"))?;
        let program = std::env::current_exe().context("Failed to locate hookhub executable")?;

        let setup = configure_at(
            &context.config_path,
            base,
            &default_hooks_dir,
            &shim_dir,
            &program,
        )?;

        git::set_global_hooks_path(&setup.shim_dir)?;

        println!(
            "{} Hooks directory: {}",
            StatusIcon::Hook.get(use_nerd_fonts),
            setup.hooks_dir.display().cyan()
        );
        println!(
            "{} Git hooks path:  {}",
            StatusIcon::Hook.get(use_nerd_fonts),
            setup.shim_dir.display().cyan()
        );
        println!(
            "{} {}",
            StatusIcon::Success.get(use_nerd_fonts),
            "hookhub is configured".green().bold()
        );
        Ok(())
    }
}

/// Create directories, shims and the config file
///
/// Everything except the git setting, so it can run against temporary
/// locations.
pub fn configure_at(
    config_path: &Path,
    mut config: Config,
    default_hooks_dir: &Path,
    shim_dir: &Path,
    program: &Path,
) -> Result<Setup> {
    let hooks_dir = config
        .hooks_dir
        .clone()
        .unwrap_or_else(|| default_hooks_dir.to_path_buf());

    for category in &SHIM_CATEGORIES {
        let dir = hooks_dir.join(category.as_str());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    fs::create_dir_all(shim_dir)
        .with_context(|| format!("Failed to create {}", shim_dir.display()))?;
    for category in &SHIM_CATEGORIES {
        write_shim(shim_dir, category, program)?;
    }

    config.hooks_dir = Some(hooks_dir.clone());
    config.save(config_path)?;
    tracing::info!(
        hooks_dir = %hooks_dir.display(),
        shim_dir = %shim_dir.display(),
        "Configured hookhub"
    );

    Ok(Setup {
        hooks_dir,
        shim_dir: shim_dir.to_path_buf(),
    })
}

/// Shell script git runs for `category`
///
/// Runs hookhub first, then chains to the repository's own hook if present.
pub fn render_shim(category: &HookCategory, program: &Path) -> String {
    let program = shell_quote(&program.to_string_lossy());
    let invoke = if category.takes_message() {
        format!("{program} run --type {category} --commit-msg \"$(cat \"$1\")\"")
    } else {
        format!("{program} run --type {category}")
    };

    format!(
        r#"#!/bin/sh
# Installed by hookhub configure
{invoke} || exit $?

repo_hook="$(git rev-parse --git-dir 2>/dev/null)/hooks/{category}"
if [ -x "$repo_hook" ]; then
    exec "$repo_hook" "$@"
fi
"#
    )
}

fn write_shim(shim_dir: &Path, category: &HookCategory, program: &Path) -> Result<()> {
    let path = shim_dir.join(category.as_str());
    fs::write(&path, render_shim(category, program)).map_err(|source| CommandError::ShimWrite {
        path: path.clone(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).map_err(|source| {
            CommandError::ShimWrite {
                path: path.clone(),
                source,
            }
        })?;
    }

    tracing::debug!("Wrote shim {}", path.display());
    Ok(())
}

/// Single-quote a string for POSIX sh
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
