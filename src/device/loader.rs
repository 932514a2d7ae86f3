//! Reads device descriptors from the configuration root.

use crate::error::{Result, TalError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads raw device descriptor text from `{root}/{sub_dir}/{key}.json`.
#[derive(Debug, Clone)]
pub struct DeviceLoader {
    root: PathBuf,
}

impl DeviceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the descriptor for `key` in `sub_dir`.
    ///
    /// Leading separators on `sub_dir` are ignored, so `"/devices"` and
    /// `"devices"` both resolve under the root.
    pub fn path_for(&self, key: &str, sub_dir: &str) -> PathBuf {
        let sub_dir = sub_dir.trim_start_matches(['/', '\\']);
        self.root.join(sub_dir).join(format!("{}.json", key))
    }

    /// Read the descriptor for `key` as text. No parsing is done here.
    pub fn load(&self, key: &str, sub_dir: &str) -> Result<String> {
        let path = self.path_for(key, sub_dir);
        debug!(path = %path.display(), "Loading device config");
        std::fs::read_to_string(&path).map_err(|source| TalError::Io { path, source })
    }
}
