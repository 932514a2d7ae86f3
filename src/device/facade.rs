//! The device facade: device configs in, page fragments out.

use super::{DeviceConfig, DeviceLoader, PageFragments};
use crate::error::{Result, TalError};
use crate::strategy::{Element, Resolution, StrategyResolver, StrategyStore};
use std::path::{Path, PathBuf};

/// Entry point for device lookups.
///
/// Holds the configuration root and a strategy store. Accessors never fail:
/// an element missing from both the device's strategy and the default
/// strategy resolves to the empty string.
#[derive(Debug, Clone)]
pub struct Tal<S> {
    loader: DeviceLoader,
    resolver: StrategyResolver<S>,
}

impl<S: StrategyStore> Tal<S> {
    pub fn new(config_path: impl Into<PathBuf>, store: S) -> Self {
        Self {
            loader: DeviceLoader::new(config_path),
            resolver: StrategyResolver::new(store),
        }
    }

    pub fn config_path(&self) -> &Path {
        self.loader.root()
    }

    pub fn store(&self) -> &S {
        self.resolver.store()
    }

    /// Raw JSON device configuration for `key` in `sub_dir`.
    ///
    /// `key` is the unique device identifier, typically `brand-model`.
    pub fn configuration_from_filesystem(&self, key: &str, sub_dir: &str) -> Result<String> {
        self.loader.load(key, sub_dir)
    }

    /// Load and parse the device configuration for `key` in `sub_dir`.
    pub fn load_config(&self, key: &str, sub_dir: &str) -> Result<DeviceConfig> {
        let raw = self.loader.load(key, sub_dir)?;
        DeviceConfig::from_json(&raw).map_err(|source| TalError::Deserialize {
            key: key.to_string(),
            source,
        })
    }

    /// Resolve one element for the device, keeping track of where it came from.
    pub fn lookup(&self, config: &DeviceConfig, element: Element) -> Resolution {
        self.resolver.lookup(&config.page_strategy, element.as_str())
    }

    /// Resolve one element, failing when neither the device's strategy nor
    /// the default strategy provides it.
    pub fn require(&self, config: &DeviceConfig, element: Element) -> Result<String> {
        match self.lookup(config, element) {
            Resolution::Unresolved => Err(TalError::Unresolved {
                strategy: config.page_strategy.clone(),
                element: element.as_str().to_string(),
            }),
            resolved => Ok(resolved.into_value()),
        }
    }

    pub fn element(&self, config: &DeviceConfig, element: Element) -> String {
        self.resolver.resolve(&config.page_strategy, element.as_str())
    }

    /// Doctype required by this device.
    pub fn doc_type(&self, config: &DeviceConfig) -> String {
        self.element(config, Element::DocType)
    }

    /// HTTP mimetype required by this device.
    pub fn mime_type(&self, config: &DeviceConfig) -> String {
        self.element(config, Element::MimeType)
    }

    /// Root HTML tag required by this device.
    pub fn root_html_tag(&self, config: &DeviceConfig) -> String {
        self.element(config, Element::RootElement)
    }

    /// Extra markup for the HTML `<head>`.
    pub fn device_headers(&self, config: &DeviceConfig) -> String {
        self.element(config, Element::Header)
    }

    /// Extra markup for the HTML `<body>`.
    pub fn device_body(&self, config: &DeviceConfig) -> String {
        self.element(config, Element::Body)
    }

    pub fn fragments(&self, config: &DeviceConfig) -> PageFragments {
        PageFragments {
            strategy: config.page_strategy.clone(),
            doctype: self.doc_type(config),
            mimetype: self.mime_type(config),
            root_element: self.root_html_tag(config),
            header: self.device_headers(config),
            body: self.device_body(config),
        }
    }
}
