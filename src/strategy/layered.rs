//! Strategy resolution across store tiers.
//!
//! Elements are looked up first-found-wins from the highest tier down:
//! an on-disk strategy directory (if configured) shadows the built-ins.

use super::{EmbeddedStrategyStore, FsStrategyStore, StrategyStore};
use crate::error::StrategyNotFound;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Filesystem strategies layered over the embedded ones.
#[derive(Debug, Clone, Default)]
pub struct LayeredStrategyStore {
    disk: Option<FsStrategyStore>,
    embedded: EmbeddedStrategyStore,
}

impl LayeredStrategyStore {
    /// Built-in strategies only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an on-disk strategy directory on top of the built-ins.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.disk = Some(FsStrategyStore::new(dir));
        self
    }

    pub fn disk(&self) -> Option<&FsStrategyStore> {
        self.disk.as_ref()
    }
}

impl StrategyStore for LayeredStrategyStore {
    fn element(&self, strategy: &str, element: &str) -> Result<String, StrategyNotFound> {
        if let Some(ref disk) = self.disk
            && let Ok(value) = disk.element(strategy, element)
        {
            return Ok(value);
        }
        self.embedded.element(strategy, element)
    }

    fn strategies(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self.embedded.strategies().into_iter().collect();
        if let Some(ref disk) = self.disk {
            names.extend(disk.strategies());
        }
        names.into_iter().collect()
    }
}
