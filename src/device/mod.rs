//! Device configuration and the page strategy facade.
//!
//! Device descriptors live on disk as `{config_path}/{sub_dir}/{key}.json`
//! and name the page strategy that applies to the device.

mod facade;
mod loader;

pub use facade::Tal;
pub use loader::DeviceLoader;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Field naming the device's page strategy, matched case-insensitively.
const PAGE_STRATEGY_FIELD: &str = "PageStrategy";

/// A device configuration (on disk as JSON).
///
/// Only the page strategy is read; other fields in the descriptor are ignored.
/// The field name is matched without regard to case and the last matching
/// key wins. A `null` value leaves the strategy unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceConfig {
    #[serde(rename = "PageStrategy")]
    pub page_strategy: String,
}

impl DeviceConfig {
    pub fn new(page_strategy: impl Into<String>) -> Self {
        Self {
            page_strategy: page_strategy.into(),
        }
    }

    /// Parse a descriptor. The top level must be a JSON object or `null`.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl<'de> Deserialize<'de> for DeviceConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DeviceConfigVisitor)
    }
}

struct DeviceConfigVisitor;

impl<'de> Visitor<'de> for DeviceConfigVisitor {
    type Value = DeviceConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a device config object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<DeviceConfig, E> {
        Ok(DeviceConfig::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DeviceConfig, A::Error> {
        let mut config = DeviceConfig::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(PAGE_STRATEGY_FIELD) {
                if let Some(strategy) = map.next_value::<Option<String>>()? {
                    config.page_strategy = strategy;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(config)
    }
}

/// Every page strategy element resolved for one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFragments {
    pub strategy: String,
    pub doctype: String,
    pub mimetype: String,
    pub root_element: String,
    pub header: String,
    pub body: String,
}
