//! Settings types.

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line settings, merged from all tiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathsSettings,

    /// Default output format for CLI commands.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Where device descriptors and page strategies live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsSettings {
    /// Root directory holding device config sub-directories.
    #[serde(default = "default_config_path")]
    pub config_path: PathBuf,

    /// Sub-directory of `config_path` with `{key}.json` descriptors.
    #[serde(default = "default_device_dir")]
    pub device_dir: String,

    /// Optional on-disk page strategies, layered over the built-ins.
    #[serde(default)]
    pub strategies_dir: Option<PathBuf>,
}

impl Default for PathsSettings {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            device_dir: default_device_dir(),
            strategies_dir: None,
        }
    }
}

fn default_config_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_device_dir() -> String {
    "deviceconfig".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.paths.config_path, PathBuf::from("."));
        assert_eq!(settings.paths.device_dir, "deviceconfig");
        assert!(settings.paths.strategies_dir.is_none());
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings: Settings = serde_yaml::from_str("paths:\n  device_dir: devices\n").unwrap();
        assert_eq!(settings.paths.device_dir, "devices");
        assert_eq!(settings.paths.config_path, PathBuf::from("."));
        assert_eq!(settings.format, OutputFormat::Json);
    }
}
