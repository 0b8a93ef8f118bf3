//! Terminal user interface components for hookhub
//!
//! - Status icons
//! - Per-hook progress spinners

pub mod icons;
pub mod progress;

pub use icons::{Icons, StatusIcon};
pub use progress::HookProgress;
