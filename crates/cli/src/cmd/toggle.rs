//! Enable and disable commands

use clap::Args;
use hookhub_core::HookCategory;
use hookhub_engine::{ToggleOutcome, hooks};
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;
use crate::ui::StatusIcon;

/// Arguments identifying one hook
#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Category of the hook (e.g. pre-commit)
    #[arg(long = "type", value_name = "CATEGORY")]
    pub hook_type: String,

    /// Name of the hook within its category
    #[arg(long, value_name = "NAME")]
    pub id: String,
}

/// Enable a disabled hook
#[derive(Debug, Args)]
pub struct EnableCommand {
    #[command(flatten)]
    pub hook: ToggleArgs,
}

/// Disable a hook without removing it
#[derive(Debug, Args)]
pub struct DisableCommand {
    #[command(flatten)]
    pub hook: ToggleArgs,
}

impl Command for EnableCommand {
    type Output = ToggleOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<ToggleOutcome> {
        toggle(context, &self.hook, true)
    }
}

impl Command for DisableCommand {
    type Output = ToggleOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<ToggleOutcome> {
        toggle(context, &self.hook, false)
    }
}

fn toggle(context: &RuntimeContext, args: &ToggleArgs, enable: bool) -> Result<ToggleOutcome> {
    let category = HookCategory::from(args.hook_type.as_str());
    let root = context.hooks_root()?;

    let outcome = if enable {
        hooks::enable(root, &category, &args.id)?
    } else {
        hooks::disable(root, &category, &args.id)?
    };

    let use_nerd_fonts = context.use_icons();
    let state = if enable { "enabled" } else { "disabled" };
    match outcome {
        ToggleOutcome::Changed => println!(
            "{} Hook {} ({}) {}",
            StatusIcon::Success.get(use_nerd_fonts),
            args.id.cyan(),
            category,
            state.green()
        ),
        ToggleOutcome::AlreadyInState => println!(
            "{} Hook {} ({}) is already {}",
            StatusIcon::Info.get(use_nerd_fonts),
            args.id.cyan(),
            category,
            state
        ),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use hookhub_config::Config;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn context(root: &std::path::Path) -> RuntimeContext {
        RuntimeContext::new(
            Config::default(),
            PathBuf::from("config.toml"),
            Some(root.to_path_buf()),
        )
    }

    fn args(id: &str) -> ToggleArgs {
        ToggleArgs {
            hook_type: "pre-commit".to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_disable_and_enable_through_commands() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("pre-commit")).unwrap();
        fs::write(temp.path().join("pre-commit/lint"), "#!/bin/sh\n").unwrap();
        let context = context(temp.path());

        let disabled = DisableCommand { hook: args("lint") }.execute(&context).unwrap();
        assert_eq!(disabled, ToggleOutcome::Changed);
        assert!(temp.path().join("pre-commit/lint.disabled").exists());

        let again = DisableCommand { hook: args("lint") }.execute(&context).unwrap();
        assert_eq!(again, ToggleOutcome::AlreadyInState);

        let enabled = EnableCommand { hook: args("lint") }.execute(&context).unwrap();
        assert_eq!(enabled, ToggleOutcome::Changed);
        assert!(temp.path().join("pre-commit/lint").exists());
    }

    #[test]
    fn test_unknown_hook_is_error() {
        let temp = TempDir::new().unwrap();
        let err = EnableCommand { hook: args("ghost") }
            .execute(&context(temp.path()))
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
