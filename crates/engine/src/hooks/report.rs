//! Aggregated results of one run

use hookhub_config::ReportOrder;
use hookhub_core::{Error, ExecutionResult, Result};

/// Every result produced by one run, in completion order
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    results: Vec<ExecutionResult>,
}

impl RunReport {
    /// Wrap results as they arrived from workers
    pub fn new(results: Vec<ExecutionResult>) -> Self {
        Self { results }
    }

    /// Number of hooks that ran
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// All results in arrival order
    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    /// Failed results in the requested order
    ///
    /// `Arrival` keeps completion order, so output from the same hook set may
    /// differ between runs. `Discovery` sorts by the hook's discovery index.
    pub fn failures(&self, order: ReportOrder) -> Vec<&ExecutionResult> {
        let mut failures: Vec<&ExecutionResult> =
            self.results.iter().filter(|r| r.is_failure()).collect();
        if order == ReportOrder::Discovery {
            failures.sort_by_key(|r| r.index);
        }
        failures
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn success_count(&self) -> usize {
        self.total() - self.failure_count()
    }

    pub fn timed_out_count(&self) -> usize {
        self.results.iter().filter(|r| r.timed_out).count()
    }

    /// True when no hook failed (vacuously true for an empty run)
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }

    /// Collapse the run into a single verdict
    ///
    /// # Errors
    ///
    /// Returns [`Error::HooksFailed`] when at least one hook failed
    pub fn verdict(&self) -> Result<()> {
        match self.failure_count() {
            0 => Ok(()),
            failed => Err(Error::HooksFailed {
                failed,
                total: self.total(),
            }),
        }
    }
}
