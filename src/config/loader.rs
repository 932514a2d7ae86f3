//! Settings loader with tier-based merging.
//!
//! Tiers, lowest to highest: built-in defaults, project `tal/config.yaml`,
//! user `~/.tal/config.yaml`, then environment variables.

use super::merge::merge_tiers;
use super::types::Settings;
use crate::error::{Result, TalError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the settings file inside each tier directory.
pub const SETTINGS_FILE: &str = "config.yaml";

/// Settings tier priority (lowest to highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    Defaults = 0,
    Project = 1,
    User = 2,
    Environment = 3,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Defaults => write!(f, "defaults"),
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Environment => write!(f, "environment"),
        }
    }
}

/// Directories searched for settings files.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project-level settings directory
    pub project_dir: Option<PathBuf>,
    /// User-level settings directory
    pub user_dir: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// Discover settings directories from the environment.
    pub fn discover() -> Self {
        // User dir: TAL_USER_DIR or ~/.tal
        let user_dir = std::env::var("TAL_USER_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".tal")));

        // Project dir: TAL_PROJECT_DIR or $CWD/tal
        let project_dir = std::env::var("TAL_PROJECT_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from("tal")));

        Self {
            project_dir,
            user_dir,
        }
    }

    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            user_dir,
        }
    }
}

/// Loads [`Settings`] from all tiers.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    pub paths: ConfigPaths,
    settings: Settings,
    /// Highest-priority settings file that contributed, if any
    settings_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Load settings from the discovered tiers.
    ///
    /// `TAL_SETTINGS` names an explicit settings file that replaces the
    /// project and user tiers.
    pub fn load() -> Result<Self> {
        let paths = ConfigPaths::discover();
        match std::env::var("TAL_SETTINGS") {
            Ok(explicit) => Self::load_file(paths, PathBuf::from(explicit)),
            Err(_) => Self::load_with_paths(paths),
        }
    }

    /// Load settings from an explicit file on top of the defaults.
    pub fn load_file(paths: ConfigPaths, path: PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| TalError::Settings(format!("{}: {}", path.display(), e)))?;
        let overlay: Value = serde_yaml::from_str(&content)
            .map_err(|e| TalError::Settings(format!("{}: {}", path.display(), e)))?;

        let mut settings = Self::merge(vec![overlay])?;
        Self::apply_env_overrides(&mut settings);

        Ok(Self {
            paths,
            settings,
            settings_path: Some(path),
        })
    }

    /// Load settings with explicit tier directories.
    pub fn load_with_paths(paths: ConfigPaths) -> Result<Self> {
        let mut overlays = Vec::new();
        let mut settings_path = None;

        for (tier, dir) in [
            (ConfigTier::Project, paths.project_dir.as_deref()),
            (ConfigTier::User, paths.user_dir.as_deref()),
        ] {
            let Some(dir) = dir else { continue };
            if let Some(value) = read_tier(tier, &dir.join(SETTINGS_FILE)) {
                overlays.push(value);
                settings_path = Some(dir.join(SETTINGS_FILE));
            }
        }

        let mut settings = Self::merge(overlays)?;
        Self::apply_env_overrides(&mut settings);

        Ok(Self {
            paths,
            settings,
            settings_path,
        })
    }

    fn merge(overlays: Vec<Value>) -> Result<Settings> {
        let defaults =
            serde_json::to_value(Settings::default()).map_err(|e| TalError::Settings(e.to_string()))?;
        let merged = merge_tiers(std::iter::once(defaults).chain(overlays));
        serde_json::from_value(merged).map_err(|e| TalError::Settings(e.to_string()))
    }

    /// Apply environment variable overrides to settings.
    fn apply_env_overrides(settings: &mut Settings) {
        if let Ok(config_path) = std::env::var("TAL_CONFIG_PATH") {
            settings.paths.config_path = PathBuf::from(config_path);
        }

        if let Ok(device_dir) = std::env::var("TAL_DEVICE_DIR") {
            settings.paths.device_dir = device_dir;
        }

        if let Ok(strategies_dir) = std::env::var("TAL_STRATEGIES_DIR") {
            settings.paths.strategies_dir = Some(PathBuf::from(strategies_dir));
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// The highest-priority settings file that was read.
    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }
}

/// Read one tier's settings file; unreadable or invalid files are skipped.
fn read_tier(tier: ConfigTier, path: &Path) -> Option<Value> {
    if !path.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(tier = %tier, path = %path.display(), error = %e, "Skipping unreadable settings file");
            return None;
        }
    };
    match serde_yaml::from_str::<Value>(&content) {
        Ok(value) => {
            debug!(tier = %tier, path = %path.display(), "Loaded settings tier");
            Some(value)
        }
        Err(e) => {
            warn!(tier = %tier, path = %path.display(), error = %e, "Skipping invalid settings file");
            None
        }
    }
}
