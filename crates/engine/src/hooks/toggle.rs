//! Enabling and disabling hooks
//!
//! A hook is disabled by renaming `<name>` to `<name>.disabled` inside its
//! category directory, and enabled by the reverse rename.

use hookhub_core::{DISABLED_SUFFIX, Error, HookCategory, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What a toggle request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The hook file was renamed
    Changed,
    /// The hook was already in the requested state
    AlreadyInState,
}

/// Enable `name` in `category` below `hooks_root`
///
/// # Errors
///
/// Returns [`Error::HookNotFound`] if neither form of the hook exists, and a
/// message error if both the enabled and disabled forms exist
pub fn enable(hooks_root: &Path, category: &HookCategory, name: &str) -> Result<ToggleOutcome> {
    set_enabled(hooks_root, category, name, true)
}

/// Disable `name` in `category` below `hooks_root`
///
/// # Errors
///
/// Same as [`enable`]
pub fn disable(hooks_root: &Path, category: &HookCategory, name: &str) -> Result<ToggleOutcome> {
    set_enabled(hooks_root, category, name, false)
}

fn set_enabled(
    hooks_root: &Path,
    category: &HookCategory,
    name: &str,
    enabled: bool,
) -> Result<ToggleOutcome> {
    category.validate()?;
    let name = name.strip_suffix(DISABLED_SUFFIX).unwrap_or(name);
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(Error::Message(format!("Invalid hook name: '{name}'")));
    }

    let (active, disabled) = hook_paths(hooks_root, category, name);

    let (from, to) = match (active.is_file(), disabled.is_file()) {
        (false, false) => {
            return Err(Error::HookNotFound {
                category: category.to_string(),
                name: name.to_string(),
            });
        }
        (true, true) => {
            return Err(Error::Message(format!(
                "Both {} and {} exist; remove one before toggling",
                active.display(),
                disabled.display()
            )));
        }
        (true, false) if enabled => return Ok(ToggleOutcome::AlreadyInState),
        (false, true) if !enabled => return Ok(ToggleOutcome::AlreadyInState),
        (true, false) => (active, disabled),
        (false, true) => (disabled, active),
    };

    fs::rename(&from, &to)?;
    tracing::info!("Renamed {} -> {}", from.display(), to.display());
    Ok(ToggleOutcome::Changed)
}

fn hook_paths(hooks_root: &Path, category: &HookCategory, name: &str) -> (PathBuf, PathBuf) {
    let dir = hooks_root.join(category.as_str());
    let active = dir.join(name);
    let disabled = dir.join(format!("{name}{DISABLED_SUFFIX}"));
    (active, disabled)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    fn setup(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("pre-commit");
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), "#!/bin/sh\n").unwrap();
        }
        temp
    }

    #[test]
    fn test_disable_then_enable() {
        let temp = setup(&["lint"]);
        let category = HookCategory::PreCommit;

        assert_eq!(
            disable(temp.path(), &category, "lint").unwrap(),
            ToggleOutcome::Changed
        );
        assert!(temp.path().join("pre-commit/lint.disabled").exists());
        assert!(!temp.path().join("pre-commit/lint").exists());

        assert_eq!(
            enable(temp.path(), &category, "lint").unwrap(),
            ToggleOutcome::Changed
        );
        assert!(temp.path().join("pre-commit/lint").exists());
    }

    #[test]
    fn test_already_in_state() {
        let temp = setup(&["lint", "slow-check.disabled"]);
        let category = HookCategory::PreCommit;

        assert_eq!(
            enable(temp.path(), &category, "lint").unwrap(),
            ToggleOutcome::AlreadyInState
        );
        assert_eq!(
            disable(temp.path(), &category, "slow-check").unwrap(),
            ToggleOutcome::AlreadyInState
        );
    }

    #[test]
    fn test_accepts_disabled_suffix_in_name() {
        let temp = setup(&["slow-check.disabled"]);
        let outcome = enable(temp.path(), &HookCategory::PreCommit, "slow-check.disabled").unwrap();
        assert_eq!(outcome, ToggleOutcome::Changed);
        assert!(temp.path().join("pre-commit/slow-check").exists());
    }

    #[test]
    fn test_missing_hook() {
        let temp = setup(&[]);
        let err = enable(temp.path(), &HookCategory::PreCommit, "ghost").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Hook 'ghost' of type 'pre-commit' not found"
        );
    }

    #[test]
    fn test_both_forms_present_is_error() {
        let temp = setup(&["lint", "lint.disabled"]);
        let err = disable(temp.path(), &HookCategory::PreCommit, "lint").unwrap_err();
        assert!(matches!(err, Error::Message(_)));
        assert!(temp.path().join("pre-commit/lint").exists());
        assert!(temp.path().join("pre-commit/lint.disabled").exists());
    }

    #[test]
    fn test_rejects_path_separators() {
        let temp = setup(&["lint"]);
        assert!(enable(temp.path(), &HookCategory::PreCommit, "../lint").is_err());
    }

    #[test]
    fn test_rejects_category_outside_root() {
        let temp = setup(&["lint"]);
        fs::write(temp.path().join("lint"), "#!/bin/sh\n").unwrap();

        let err = disable(temp.path(), &HookCategory::from(""), "lint").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(temp.path().join("lint").exists());
        assert!(!temp.path().join("lint.disabled").exists());
    }
}
