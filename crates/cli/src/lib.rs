//! hookhub CLI library
//!
//! This library contains all the CLI logic for hookhub, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hookhub_config::Config;
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;

/// hookhub - run git hooks in parallel
#[derive(Parser)]
#[command(name = "hookhub")]
#[command(about = "Run git hooks from a shared hooks directory in parallel")]
#[command(version)]
#[command(long_about = "Run git hooks from a shared hooks directory in parallel

Hooks live at <hooks-dir>/<category>/<name>. Every active hook of the
requested category runs at the same time; the run fails if any hook fails.

Rename a hook to <name>.disabled (or use 'hookhub disable') to keep it
without running it.")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, env = "HOOKHUB_CONFIG", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Root directory holding one subdirectory per hook category
    #[arg(long, env = "HOOKHUB_HOOKS_DIR", value_name = "DIR", global = true)]
    pub hooks_dir: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "HOOKHUB_LOG_FILE", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for hookhub CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run active hooks of one category, or of all categories
    #[command(long_about = "Run active hooks of one category, or of all categories

Examples:
  • hookhub run --type pre-commit
      → Run every enabled pre-commit hook in parallel

  • hookhub run --type commit-msg --commit-msg \"feat: add runner\"
      → Validate a commit message

  • hookhub run --all
      → Run every enabled hook of every category")]
    Run(cmd::run::RunCommand),

    /// List hooks, including disabled ones
    List(cmd::list::ListCommand),

    /// Enable a disabled hook
    Enable(cmd::toggle::EnableCommand),

    /// Disable a hook without removing it
    Disable(cmd::toggle::DisableCommand),

    /// Create the config file and point git at hookhub's hook shims
    Configure(cmd::configure::ConfigureCommand),
}

/// Main entry point for the CLI logic
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    hookhub_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        rustc = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown"),
        built = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        "Starting hookhub"
    );

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let context = RuntimeContext::new(config, config_path, cli.hooks_dir);

    execute_command(cli.command, &context)
}

fn execute_command(command: Commands, context: &RuntimeContext) -> Result<()> {
    match command {
        Commands::Run(run_cmd) => run_cmd.execute(context)?,
        Commands::List(list_cmd) => list_cmd.execute(context)?,
        Commands::Enable(enable_cmd) => {
            enable_cmd.execute(context)?;
        }
        Commands::Disable(disable_cmd) => {
            disable_cmd.execute(context)?;
        }
        Commands::Configure(configure_cmd) => configure_cmd.execute(context)?,
    }
    Ok(())
}

/// Config file from the flag, or the XDG default
fn resolve_config_path(explicit: Option<&std::path::Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(hookhub_config::expand_tilde(path)),
        None => hookhub_config::default_config_file()
            .context("Could not determine config directory; pass --config"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_hooks_dir_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hookhub",
            "configure",
            "--hooks-dir",
            "/tmp/hooks",
            "--yes",
        ])
        .unwrap();
        assert_eq!(cli.hooks_dir.as_deref(), Some(Path::new("/tmp/hooks")));
        assert!(matches!(cli.command, Commands::Configure(_)));
    }

    #[test]
    fn test_toggle_requires_type_and_id() {
        assert!(Cli::try_parse_from(["hookhub", "disable", "--id", "lint"]).is_err());
        let cli =
            Cli::try_parse_from(["hookhub", "disable", "--type", "pre-commit", "--id", "lint"])
                .unwrap();
        match cli.command {
            Commands::Disable(cmd) => {
                assert_eq!(cmd.hook.hook_type, "pre-commit");
                assert_eq!(cmd.hook.id, "lint");
            }
            _ => panic!("expected disable"),
        }
    }

    #[test]
    fn test_explicit_config_path() {
        let path = resolve_config_path(Some(Path::new("/etc/hookhub.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/etc/hookhub.toml"));
    }
}
