//! CLI command implementations
//!
//! This module contains all command implementations for the hookhub CLI.

pub mod configure;
pub mod list;
pub mod run;
pub mod toggle;
