//! Device configuration and page strategy lookup.
//!
//! Loads per-device JSON descriptors, reads the page strategy they name and
//! resolves the presentation fragments (doctype, mimetype, root element,
//! head and body markup) that strategy provides, falling back to the
//! `default` strategy.

pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod format;
pub mod logging;
pub mod normalize;
pub mod strategy;

pub use device::{DeviceConfig, PageFragments, Tal};
pub use error::{Result, TalError};
pub use normalize::normalize_key_name;
