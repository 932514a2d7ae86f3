//! Page strategies stored on disk.
//!
//! Layout: `{root}/{strategy}/{element}`, one plain file per element.

use super::StrategyStore;
use crate::error::StrategyNotFound;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Store reading strategy elements from a directory tree.
#[derive(Debug, Clone)]
pub struct FsStrategyStore {
    root: PathBuf,
}

impl FsStrategyStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an element file, or `None` if either name could escape the root.
    fn element_path(&self, strategy: &str, element: &str) -> Option<PathBuf> {
        if !is_plain_name(strategy) || !is_plain_name(element) {
            return None;
        }
        Some(self.root.join(strategy).join(element))
    }
}

/// A single path component: non-empty, no separators, not `.` or `..`.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

impl StrategyStore for FsStrategyStore {
    fn element(&self, strategy: &str, element: &str) -> Result<String, StrategyNotFound> {
        let path = self
            .element_path(strategy, element)
            .ok_or_else(|| StrategyNotFound::new(strategy, element))?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) => {
                trace!(path = %path.display(), error = %e, "Strategy element not readable");
                Err(StrategyNotFound::new(strategy, element))
            }
        }
    }

    fn strategies(&self) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(&self.root) {
            for entry in entries.flatten() {
                if entry.path().is_dir()
                    && let Some(name) = entry.file_name().to_str()
                {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        names
    }
}
