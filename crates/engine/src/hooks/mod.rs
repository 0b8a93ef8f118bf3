//! Hook system
//!
//! Discovers hooks on disk and runs them in parallel.
//!
//! ## Execution Model
//!
//! - Hooks live at `<hooks root>/<category>/<name>`
//! - A `.disabled` suffix keeps a hook on disk without running it
//! - Every active hook in scope runs **in parallel**, bounded by `max_parallel`
//! - A run returns only after every hook has finished
//!
//! ## Module Organization
//!
//! - `loader`: Hook discovery from the filesystem
//! - `executor`: Hook execution engine with bounded parallelism
//! - `state`: Per-hook progress tracking and rendering hooks
//! - `report`: Aggregated run results and the overall verdict
//! - `toggle`: Enabling and disabling hooks on disk

pub mod executor;
pub mod loader;
pub mod report;
pub mod state;
pub mod toggle;

// Re-export main types for convenience
pub use executor::{HOOK_CATEGORY_ENV, HOOK_NAME_ENV, HookRunner, HookRunnerBuilder};
pub use loader::HookLoader;
pub use report::RunReport;
pub use state::{NoOpRenderer, ProgressBoard, ProgressPhase, ProgressRenderer};
pub use toggle::{ToggleOutcome, disable, enable};
