//! Hook execution engine
//!
//! Runs every discovered hook as its own child process on a bounded worker
//! pool and collects exactly one [`ExecutionResult`] per hook.
//!
//! A failing hook never affects its siblings: spawn errors, non-zero exits and
//! timeouts are all classified as [`Outcome::Failure`] and reported after the
//! whole pool has drained.

use super::report::RunReport;
use super::state::{NoOpRenderer, ProgressBoard, ProgressRenderer};
use hookhub_config::RunConfig;
use hookhub_core::{Error, ExecutionResult, HookDescriptor, Outcome, Result};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Environment variable carrying the running hook's name
pub const HOOK_NAME_ENV: &str = "HOOKHUB_HOOK_NAME";
/// Environment variable carrying the running hook's category
pub const HOOK_CATEGORY_ENV: &str = "HOOKHUB_HOOK_CATEGORY";

/// Hook execution runner with bounded parallelism
///
/// # Examples
///
/// ```ignore
/// let runner = HookRunner::builder()
///     .max_parallel(4)
///     .timeout(Some(Duration::from_secs(60)))
///     .commit_message(Some(message))
///     .build();
///
/// let report = runner.run(&hooks)?;
/// report.verdict()?;
/// ```
pub struct HookRunner<R = NoOpRenderer>
where
    R: ProgressRenderer,
{
    max_parallel: usize,
    timeout: Option<Duration>,
    commit_message: Option<String>,
    working_dir: Option<PathBuf>,
    renderer: R,
}

impl HookRunner<NoOpRenderer> {
    /// Create a runner with default settings and no progress rendering
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for configuring a `HookRunner`
    pub fn builder() -> HookRunnerBuilder<NoOpRenderer> {
        HookRunnerBuilder::new()
    }
}

impl Default for HookRunner<NoOpRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> HookRunner<R>
where
    R: ProgressRenderer,
{
    /// Run every hook and wait for all of them to finish
    ///
    /// Hooks are queued eagerly and drained by at most `max_parallel` workers.
    /// Results arrive through a channel sized to the number of hooks, so no
    /// worker ever blocks while reporting. The returned report keeps arrival
    /// order.
    ///
    /// # Errors
    ///
    /// Only fails if the worker pool cannot be created. Individual hook
    /// failures are recorded in the report, never returned here.
    #[tracing::instrument(skip_all, fields(hook_count = hooks.len(), max_parallel = self.max_parallel))]
    pub fn run(&self, hooks: &[HookDescriptor]) -> Result<RunReport> {
        if hooks.is_empty() {
            tracing::debug!("No active hooks to run");
            return Ok(RunReport::default());
        }

        let board = ProgressBoard::new(hooks, &self.renderer);

        let workers = self.max_parallel.clamp(1, hooks.len());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("hookhub-worker-{i}"))
            .build()
            .map_err(|e| Error::Message(format!("Failed to start worker pool: {e}")))?;

        let (tx, rx) = mpsc::sync_channel::<ExecutionResult>(hooks.len());

        // The scope returns only after every spawned task has finished
        pool.scope(|scope| {
            for hook in hooks {
                let tx = tx.clone();
                let board = &board;
                scope.spawn(move |_| {
                    let result = self.execute_hook(hook, board);
                    if tx.send(result).is_err() {
                        tracing::error!(hook = %hook.key(), "Result channel closed early");
                    }
                });
            }
        });
        drop(tx);

        let results: Vec<ExecutionResult> = rx.into_iter().collect();
        debug_assert!(board.is_complete());

        let report = RunReport::new(results);
        tracing::debug!(
            total = report.total(),
            failed = report.failure_count(),
            "All hooks finished"
        );
        Ok(report)
    }

    /// Arguments passed to a hook: the commit message for the
    /// message-validation category, nothing otherwise
    fn hook_args(&self, hook: &HookDescriptor) -> Vec<String> {
        match &self.commit_message {
            Some(message) if hook.category.takes_message() => vec![message.clone()],
            _ => Vec::new(),
        }
    }

    /// Execute a single hook, driving its progress entry
    fn execute_hook<P>(&self, hook: &HookDescriptor, board: &ProgressBoard<'_, P>) -> ExecutionResult
    where
        P: ProgressRenderer + ?Sized,
    {
        let span = tracing::info_span!(
            "hook_execution",
            hook_name = %hook.name,
            category = %hook.category,
        );
        let _guard = span.enter();

        let start = Instant::now();
        let args = self.hook_args(hook);
        tracing::debug!("Starting hook {} {:?}", hook.path.display(), args);

        let mut expression = duct::cmd(&hook.path, args)
            .env(HOOK_NAME_ENV, &hook.name)
            .env(HOOK_CATEGORY_ENV, hook.category.as_str())
            .stdin_null()
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked();
        if let Some(dir) = &self.working_dir {
            expression = expression.dir(dir);
        }

        let (outcome, output, timed_out) = match expression.start() {
            Ok(handle) => {
                if let Err(e) = board.start(hook) {
                    tracing::warn!("{e}");
                }
                self.wait(&handle)
            }
            Err(e) => (
                Outcome::Failure,
                format!("failed to start {}: {}", hook.path.display(), e),
                false,
            ),
        };

        if let Err(e) = board.finish(hook, outcome) {
            tracing::warn!("{e}");
        }

        let elapsed = start.elapsed();
        match outcome {
            Outcome::Success => {
                tracing::debug!(elapsed_ms = elapsed.as_millis(), "Hook passed");
            }
            Outcome::Failure => {
                tracing::debug!(elapsed_ms = elapsed.as_millis(), timed_out, "Hook failed");
            }
        }

        ExecutionResult {
            name: hook.name.clone(),
            category: hook.category.clone(),
            outcome,
            output,
            index: hook.index,
            elapsed,
            timed_out,
        }
    }

    /// Wait for a started child, enforcing the deadline if one is set
    ///
    /// Returns (outcome, captured output, timed out)
    ///
    /// On timeout only the hook's own process is killed. Processes it forked
    /// without `exec` (a `sleep` in a shell script, say) are not signalled and
    /// keep running detached from the run, which still returns on time.
    fn wait(&self, handle: &duct::Handle) -> (Outcome, String, bool) {
        let waited = match self.timeout {
            Some(limit) => match handle.wait_timeout(limit) {
                Ok(Some(output)) => Ok(output),
                Ok(None) => {
                    if let Err(e) = handle.kill() {
                        tracing::warn!("Failed to kill timed out hook: {e}");
                    }
                    return (
                        Outcome::Failure,
                        format!("timed out after {}s", limit.as_secs_f64()),
                        true,
                    );
                }
                Err(e) => Err(e),
            },
            None => handle.wait(),
        };

        match waited {
            Ok(output) => (
                Outcome::from_success(output.status.success()),
                String::from_utf8_lossy(&output.stdout).into_owned(),
                false,
            ),
            Err(e) => (
                Outcome::Failure,
                format!("failed waiting for hook: {e}"),
                false,
            ),
        }
    }
}

// ======================================================================
// HookRunnerBuilder - builder pattern for HookRunner
// ======================================================================

/// Builder for creating a `HookRunner` with custom configuration
pub struct HookRunnerBuilder<R = NoOpRenderer>
where
    R: ProgressRenderer,
{
    max_parallel: usize,
    timeout: Option<Duration>,
    commit_message: Option<String>,
    working_dir: Option<PathBuf>,
    renderer: R,
}

impl HookRunnerBuilder<NoOpRenderer> {
    /// Create a builder with defaults taken from [`RunConfig::default`]
    pub fn new() -> Self {
        let defaults = RunConfig::default();
        Self {
            max_parallel: defaults.parallelism(),
            timeout: defaults.timeout(),
            commit_message: None,
            working_dir: None,
            renderer: NoOpRenderer,
        }
    }

    /// Set the progress renderer
    ///
    /// Transforms the builder to use a specific renderer type.
    pub fn renderer<F>(self, renderer: F) -> HookRunnerBuilder<F>
    where
        F: ProgressRenderer,
    {
        HookRunnerBuilder {
            max_parallel: self.max_parallel,
            timeout: self.timeout,
            commit_message: self.commit_message,
            working_dir: self.working_dir,
            renderer,
        }
    }
}

impl Default for HookRunnerBuilder<NoOpRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> HookRunnerBuilder<R>
where
    R: ProgressRenderer,
{
    /// Apply worker count and deadline from configuration
    #[must_use]
    pub fn config(self, run: &RunConfig) -> Self {
        self.max_parallel(run.parallelism()).timeout(run.timeout())
    }

    /// Maximum number of hooks running at once (clamped to at least one)
    #[must_use]
    pub fn max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel.max(1);
        self
    }

    /// Per-hook deadline; `None` lets hooks run indefinitely
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Message handed to message-validation hooks as their sole argument
    #[must_use]
    pub fn commit_message(mut self, message: Option<String>) -> Self {
        self.commit_message = message;
        self
    }

    /// Working directory for hook processes (defaults to the current one)
    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Build the `HookRunner`
    pub fn build(self) -> HookRunner<R> {
        HookRunner {
            max_parallel: self.max_parallel,
            timeout: self.timeout,
            commit_message: self.commit_message,
            working_dir: self.working_dir,
            renderer: self.renderer,
        }
    }
}
