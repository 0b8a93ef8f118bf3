//! Core types and utilities for hookhub
//!
//! This is the foundation crate (Layer 0) that all other hookhub crates depend on.
//! It provides:
//! - The hook data model (descriptors, categories, scopes, results)
//! - Base error types
//!
//! This crate has no dependencies on other hookhub crates.

pub mod error;
pub mod hook;

pub use error::{Error, Result};
pub use hook::{
    DISABLED_SUFFIX, ExecutionResult, HookCategory, HookDescriptor, Outcome, Scope,
};
