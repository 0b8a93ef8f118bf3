//! # hookhub Engine
//!
//! Discovery and parallel execution of git hooks.
//!
//! - **Discovery**: Walking `<hooks root>/<category>/<name>` into hook descriptors
//! - **Execution**: Running every hook as a child process on a bounded pool
//! - **Progress**: Lock-free per-hook lifecycle tracking with pluggable rendering
//! - **Reporting**: Collapsing results into a single pass/fail verdict

pub mod hooks;

// Re-export error types from core
pub use hookhub_core::{Error, Result};

// Re-export commonly used types
pub use hooks::{
    HookLoader, HookRunner, HookRunnerBuilder, NoOpRenderer, ProgressBoard, ProgressPhase,
    ProgressRenderer, RunReport, ToggleOutcome,
};
