//! List command implementation
//!
//! Show every hook under the hooks root, enabled or not.

use anyhow::Context;
use clap::{Args, ValueEnum};
use hookhub_core::{HookCategory, HookDescriptor, Scope};
use hookhub_engine::HookLoader;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;
use crate::ui::StatusIcon;

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human readable, grouped by category
    Simple,
    /// Machine readable JSON
    Json,
}

/// List hooks
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list hooks of this category
    #[arg(long = "type", value_name = "CATEGORY")]
    pub hook_type: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Simple)]
    pub format: ListFormat,
}

impl Command for ListCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let scope = match &self.hook_type {
            Some(category) => Scope::Category(HookCategory::from(category.as_str())),
            None => Scope::All,
        };

        let hooks_root = context.hooks_root()?;
        let hooks = HookLoader::new(hooks_root).load_with_disabled(&scope)?;

        let mut stdout = io::stdout().lock();
        match self.format {
            ListFormat::Json => {
                let json = serde_json::json!({
                    "hooksDir": hooks_root,
                    "hooks": hooks,
                });
                let rendered =
                    serde_json::to_string_pretty(&json).context("Failed to serialize hooks")?;
                writeln!(stdout, "{rendered}")?;
            }
            ListFormat::Simple => {
                write_simple(
                    &mut stdout,
                    hooks_root,
                    &hooks,
                    context.use_icons(),
                    context.is_tty(),
                )?;
            }
        }
        Ok(())
    }
}

/// Write hooks grouped by category
fn write_simple<W: Write>(
    out: &mut W,
    hooks_root: &Path,
    hooks: &[HookDescriptor],
    use_nerd_fonts: bool,
    color: bool,
) -> io::Result<()> {
    if color {
        writeln!(out, "Hooks directory: {}", hooks_root.display().cyan())?;
    } else {
        writeln!(out, "Hooks directory: {}", hooks_root.display())?;
    }

    if hooks.is_empty() {
        writeln!(out, "\nNo hooks found.")?;
        return Ok(());
    }

    // Descriptors arrive grouped by category in discovery order
    let mut current: Option<&HookCategory> = None;
    for hook in hooks {
        if current != Some(&hook.category) {
            let count = hooks.iter().filter(|h| h.category == hook.category).count();
            let heading = format!("{} ({count} hooks)", hook.category);
            if color {
                writeln!(out, "\n{}", heading.bold())?;
            } else {
                writeln!(out, "\n{heading}")?;
            }
            current = Some(&hook.category);
        }

        let icon = if hook.enabled {
            StatusIcon::Success.get(use_nerd_fonts)
        } else {
            StatusIcon::Pending.get(use_nerd_fonts)
        };
        match (hook.enabled, color) {
            (true, true) => writeln!(out, "  {} {}", icon.green(), hook.name.green())?,
            (true, false) => writeln!(out, "  {icon} {}", hook.name)?,
            (false, true) => writeln!(
                out,
                "  {} {} {}",
                icon.dimmed(),
                hook.name.dimmed(),
                "[disabled]".dimmed()
            )?,
            (false, false) => writeln!(out, "  {icon} {} [disabled]", hook.name)?,
        }
    }
    Ok(())
}
