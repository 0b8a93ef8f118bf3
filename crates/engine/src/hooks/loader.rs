//! Hook discovery
//!
//! Walks the hooks root (`<root>/<category>/<name>`) and turns each usable
//! file into a [`HookDescriptor`]. Entries carrying the `.disabled` suffix are
//! never returned as active hooks.

use hookhub_config::Config;
use hookhub_core::{DISABLED_SUFFIX, Error, HookCategory, HookDescriptor, Result, Scope};
use std::fs;
use std::path::{Path, PathBuf};

/// Discover hooks below a hooks root
#[derive(Debug, Clone)]
pub struct HookLoader {
    hooks_root: PathBuf,
}

impl HookLoader {
    /// Create a loader for an explicit hooks root
    #[must_use]
    pub fn new(hooks_root: impl Into<PathBuf>) -> Self {
        Self {
            hooks_root: hooks_root.into(),
        }
    }

    /// Create a loader from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no hooks root is configured
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.hooks_root()?))
    }

    /// The hooks root this loader reads from
    #[must_use]
    pub fn hooks_root(&self) -> &Path {
        &self.hooks_root
    }

    /// Load the active hooks selected by `scope`, in discovery order
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the hooks root is missing or unreadable
    /// or the scope names something other than a plain category directory, and
    /// a discovery error if a category directory cannot be enumerated
    pub fn load(&self, scope: &Scope) -> Result<Vec<HookDescriptor>> {
        self.collect(scope, false)
    }

    /// Load every hook selected by `scope`, including disabled ones
    pub fn load_with_disabled(&self, scope: &Scope) -> Result<Vec<HookDescriptor>> {
        self.collect(scope, true)
    }

    fn collect(&self, scope: &Scope, include_disabled: bool) -> Result<Vec<HookDescriptor>> {
        self.ensure_root()?;

        let mut hooks = Vec::new();
        for (category, dir) in self.category_dirs(scope)? {
            self.scan_category(&category, &dir, include_disabled, &mut hooks)?;
        }

        tracing::debug!(
            scope = %scope,
            count = hooks.len(),
            "Discovered hooks in {}",
            self.hooks_root.display()
        );
        Ok(hooks)
    }

    fn ensure_root(&self) -> Result<()> {
        let metadata = fs::metadata(&self.hooks_root).map_err(|e| {
            Error::Config(format!(
                "hooks directory {} is not readable: {}. Run 'hookhub configure' first",
                self.hooks_root.display(),
                e
            ))
        })?;

        if !metadata.is_dir() {
            return Err(Error::Config(format!(
                "hooks directory {} is not a directory",
                self.hooks_root.display()
            )));
        }
        Ok(())
    }

    /// Category subdirectories in scope, sorted by name
    fn category_dirs(&self, scope: &Scope) -> Result<Vec<(HookCategory, PathBuf)>> {
        match scope {
            Scope::Category(category) => {
                category.validate()?;
                let dir = self.hooks_root.join(category.as_str());
                if dir.is_dir() {
                    Ok(vec![(category.clone(), dir)])
                } else {
                    tracing::debug!("No directory for category '{}'", category);
                    Ok(Vec::new())
                }
            }
            Scope::All => {
                let dirs = read_dir_sorted(&self.hooks_root)?
                    .into_iter()
                    .filter(|path| path.is_dir())
                    .filter_map(|path| {
                        let name = path.file_name()?.to_str()?;
                        if name.starts_with('.') {
                            return None;
                        }
                        Some((HookCategory::from(name), path))
                    })
                    .collect();
                Ok(dirs)
            }
        }
    }

    fn scan_category(
        &self,
        category: &HookCategory,
        dir: &Path,
        include_disabled: bool,
        hooks: &mut Vec<HookDescriptor>,
    ) -> Result<()> {
        for path in read_dir_sorted(dir)? {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!("Skipping hook with non UTF-8 name: {}", path.display());
                continue;
            };

            // Skip hidden files and editor backups
            if file_name.starts_with('.')
                || file_name.ends_with('~')
                || file_name.to_lowercase().ends_with(".swp")
            {
                continue;
            }

            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::warn!("Skipping unreadable hook {}: {}", path.display(), e);
                    continue;
                }
            };
            if metadata.is_dir() {
                continue;
            }

            let (name, enabled) = match file_name.strip_suffix(DISABLED_SUFFIX) {
                Some(stem) => (stem, false),
                None => (file_name, true),
            };

            if !enabled && !include_disabled {
                tracing::debug!("Skipping disabled hook '{}/{}'", category, name);
                continue;
            }

            if enabled && !include_disabled && !is_executable(&metadata) {
                tracing::warn!("Skipping non-executable hook: {}", path.display());
                continue;
            }

            hooks.push(HookDescriptor {
                name: name.to_string(),
                category: category.clone(),
                path,
                enabled,
                index: hooks.len(),
            });
        }
        Ok(())
    }
}

/// Read a directory's entries sorted by path
fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::Discovery {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Discovery {
            path: dir.to_path_buf(),
            source,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    true
}
