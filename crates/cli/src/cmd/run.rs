//! Run command implementation
//!
//! Discover the active hooks in scope, run them in parallel and report
//! every failure once all of them have finished.

use clap::{ArgGroup, Args};
use hookhub_config::ReportOrder;
use hookhub_core::{ExecutionResult, HookCategory, Scope};
use hookhub_engine::{HookLoader, HookRunner, RunReport};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;
use crate::ui::{HookProgress, StatusIcon};

/// Run hooks
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("scope").required(true).args(["all", "hook_type"])))]
pub struct RunCommand {
    /// Run hooks of every category
    #[arg(long)]
    pub all: bool,

    /// Run hooks of one category (e.g. pre-commit)
    #[arg(long = "type", value_name = "CATEGORY")]
    pub hook_type: Option<String>,

    /// Commit message handed to commit-msg hooks
    #[arg(long = "commit-msg", value_name = "MESSAGE")]
    pub commit_msg: Option<String>,
}

impl RunCommand {
    /// Scope selected on the command line
    pub fn scope(&self) -> Scope {
        match &self.hook_type {
            Some(category) if !self.all => Scope::Category(HookCategory::from(category.as_str())),
            _ => Scope::All,
        }
    }
}

impl Command for RunCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let scope = self.scope();
        let hooks = HookLoader::new(context.hooks_root()?).load(&scope)?;

        if hooks.is_empty() {
            println!("{}", "No active hooks found.".yellow());
            return Ok(());
        }

        let run_config = &context.config.run;
        let use_nerd_fonts = context.use_icons();
        let is_tty = context.is_tty();

        tracing::debug!(scope = %scope, count = hooks.len(), "Running hooks");

        let builder = HookRunner::builder()
            .config(run_config)
            .commit_message(self.commit_msg.clone());

        let report = if is_tty && context.config.ui.progress {
            // Finished spinner lines stay on screen with their status glyph
            let progress = HookProgress::new(use_nerd_fonts);
            let runner = builder.renderer(&progress).build();
            runner.run(&hooks)?
        } else {
            builder.build().run(&hooks)?
        };

        let mut stdout = io::stdout().lock();
        print_report(
            &mut stdout,
            &report,
            run_config.report_order,
            use_nerd_fonts,
            is_tty,
        )?;

        report.verdict()?;
        Ok(())
    }
}

/// Write one block per failed hook, followed by a summary line
pub fn print_report<W: Write>(
    out: &mut W,
    report: &RunReport,
    order: ReportOrder,
    use_nerd_fonts: bool,
    color: bool,
) -> io::Result<()> {
    let failures = report.failures(order);
    write_failure_blocks(out, &failures, StatusIcon::Error.get(use_nerd_fonts), color)?;

    let summary = if failures.is_empty() {
        format!(
            "{} All {} hooks passed",
            StatusIcon::Success.get(use_nerd_fonts),
            report.total()
        )
    } else {
        let mut line = format!(
            "{} {} passed, {} failed",
            StatusIcon::Error.get(use_nerd_fonts),
            report.success_count(),
            report.failure_count()
        );
        let timed_out = report.timed_out_count();
        if timed_out > 0 {
            line.push_str(&format!(" ({timed_out} timed out)"));
        }
        line
    };

    match (color, failures.is_empty()) {
        (true, true) => writeln!(out, "\n{}", summary.green().bold()),
        (true, false) => writeln!(out, "\n{}", summary.red().bold()),
        (false, _) => writeln!(out, "\n{summary}"),
    }
}

/// Write `"\n<glyph> <name> check failed:\n<output>\n"` per failure
pub fn write_failure_blocks<W: Write>(
    out: &mut W,
    failures: &[&ExecutionResult],
    glyph: &str,
    color: bool,
) -> io::Result<()> {
    for result in failures {
        let header = format!("{glyph} {} check failed:", result.name);
        if color {
            write!(out, "\n{}\n{}\n", header.red().bold(), result.output)?;
        } else {
            write!(out, "\n{header}\n{}\n", result.output)?;
        }
    }
    Ok(())
}
