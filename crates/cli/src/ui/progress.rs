//! Terminal progress for hook runs
//!
//! One indicatif spinner per hook inside a `MultiProgress`. The spinners only
//! mirror transitions reported by the engine's progress board.

use hookhub_core::Outcome;
use hookhub_engine::{ProgressPhase, ProgressRenderer};
use indexmap::IndexMap;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::sync::Mutex;
use std::time::Duration;

use super::icons::StatusIcon;

/// Spinner-per-hook renderer
pub struct HookProgress {
    multi: MultiProgress,
    bars: Mutex<IndexMap<String, ProgressBar>>,
    use_nerd_fonts: bool,
}

impl HookProgress {
    /// Create a renderer drawing to stderr
    pub fn new(use_nerd_fonts: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(IndexMap::new()),
            use_nerd_fonts,
        }
    }

    fn bar(&self, key: &str) -> Option<ProgressBar> {
        let bars = self.bars.lock().ok()?;
        bars.get(key).cloned()
    }
}

impl ProgressRenderer for HookProgress {
    fn register(&self, key: &str, label: &str) {
        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(pending_style());
        bar.set_prefix(StatusIcon::Pending.get(self.use_nerd_fonts));
        bar.set_message(label.to_string());

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(key.to_string(), bar);
        }
    }

    fn transition(&self, key: &str, label: &str, phase: ProgressPhase) {
        let Some(bar) = self.bar(key) else {
            return;
        };

        match phase {
            ProgressPhase::Pending => {}
            ProgressPhase::Running => {
                bar.set_style(running_style());
                bar.enable_steady_tick(Duration::from_millis(100));
            }
            ProgressPhase::Done(outcome) => {
                let line = match outcome {
                    Outcome::Success => format!(
                        "{} {}",
                        StatusIcon::Success.get(self.use_nerd_fonts).green(),
                        label
                    ),
                    Outcome::Failure => format!(
                        "{} {}",
                        StatusIcon::Error.get(self.use_nerd_fonts).red(),
                        label.red()
                    ),
                };
                bar.set_style(done_style());
                bar.finish_with_message(line);
            }
        }
    }
}

fn pending_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{prefix:.dim} {msg:.dim}")
        .expect("pending template is valid")
}

fn running_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .expect("spinner template is valid")
}

fn done_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{msg}")
        .expect("done template is valid")
}
