//! Hook data model
//!
//! Types shared by discovery, execution and reporting. A hook is an executable
//! file living at `<hooks_root>/<category>/<name>`; renaming it to
//! `<name>.disabled` takes it out of every run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Filename suffix marking a hook as disabled
pub const DISABLED_SUFFIX: &str = ".disabled";

/// Lifecycle event a hook is bound to
///
/// The well-known git events get their own variant. Any other subdirectory
/// of the hooks root is still a valid category and is kept as [`HookCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HookCategory {
    PreCommit,
    PrepareCommitMsg,
    CommitMsg,
    PostCommit,
    PrePush,
    PreRebase,
    PostCheckout,
    PostMerge,
    Other(String),
}

impl HookCategory {
    /// All well-known categories
    pub const KNOWN: [Self; 8] = [
        Self::PreCommit,
        Self::PrepareCommitMsg,
        Self::CommitMsg,
        Self::PostCommit,
        Self::PrePush,
        Self::PreRebase,
        Self::PostCheckout,
        Self::PostMerge,
    ];

    /// Directory name of this category under the hooks root
    pub fn as_str(&self) -> &str {
        match self {
            Self::PreCommit => "pre-commit",
            Self::PrepareCommitMsg => "prepare-commit-msg",
            Self::CommitMsg => "commit-msg",
            Self::PostCommit => "post-commit",
            Self::PrePush => "pre-push",
            Self::PreRebase => "pre-rebase",
            Self::PostCheckout => "post-checkout",
            Self::PostMerge => "post-merge",
            Self::Other(name) => name,
        }
    }

    /// Check that this category names exactly one subdirectory of the hooks root
    ///
    /// # Errors
    ///
    /// Returns a configuration error for empty names, names starting with a
    /// dot (including `.` and `..`) and names containing a path separator
    pub fn validate(&self) -> crate::Result<()> {
        let name = self.as_str();
        if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
            return Err(crate::Error::Config(format!(
                "invalid hook type '{name}': expected a directory name such as 'pre-commit'"
            )));
        }
        Ok(())
    }

    /// Whether hooks of this category receive the commit message as an argument
    #[inline]
    pub fn takes_message(&self) -> bool {
        matches!(self, Self::CommitMsg)
    }
}

impl From<&str> for HookCategory {
    fn from(value: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == value)
            .unwrap_or_else(|| Self::Other(value.to_string()))
    }
}

impl From<String> for HookCategory {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<HookCategory> for String {
    fn from(value: HookCategory) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for HookCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which hooks a run selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every category subdirectory
    All,
    /// Exactly one category subdirectory
    Category(HookCategory),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(category) => write!(f, "{category}"),
        }
    }
}

/// One discovered hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookDescriptor {
    /// Filename without the disabled suffix, unique within its category
    pub name: String,
    pub category: HookCategory,
    /// Location of the file on disk (the `.disabled` name when disabled)
    pub path: PathBuf,
    /// Derived from the filename, never stored
    pub enabled: bool,
    /// Position in discovery order
    #[serde(skip)]
    pub index: usize,
}

impl HookDescriptor {
    /// Key identifying this hook across categories (`<category>/<name>`)
    pub fn key(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }
}

/// Pass/fail classification of one hook run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Classify by process exit: only a zero status passes
    #[inline]
    pub fn from_success(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::Failure
        }
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        self == Self::Failure
    }
}

/// Result of running exactly one hook
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub name: String,
    pub category: HookCategory,
    pub outcome: Outcome,
    /// Combined stdout and stderr of the child, or a spawn/timeout diagnostic
    pub output: String,
    /// Discovery index of the hook that produced this result
    pub index: usize,
    pub elapsed: Duration,
    /// Set when the child was killed at its deadline
    pub timed_out: bool,
}

impl ExecutionResult {
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }
}
