//! Page strategy resolution.
//!
//! A page strategy is a named bundle of presentation fragments (doctype,
//! mimetype, root element, head and body markup) selected per device class.
//! Values come from a [`StrategyStore`]; [`StrategyResolver`] adds the
//! fallback to the `default` strategy.

mod embedded;
mod fs;
mod layered;

pub use embedded::EmbeddedStrategyStore;
pub use fs::FsStrategyStore;
pub use layered::LayeredStrategyStore;

use crate::error::StrategyNotFound;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

/// Strategy used when a device's own strategy cannot provide an element.
pub const DEFAULT_STRATEGY: &str = "default";

/// Source of page strategy elements.
pub trait StrategyStore: Send + Sync {
    /// Look up one element of one strategy.
    fn element(&self, strategy: &str, element: &str) -> Result<String, StrategyNotFound>;

    /// Names of the strategies this store knows about, sorted.
    fn strategies(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<S: StrategyStore + ?Sized> StrategyStore for &S {
    fn element(&self, strategy: &str, element: &str) -> Result<String, StrategyNotFound> {
        (**self).element(strategy, element)
    }

    fn strategies(&self) -> Vec<String> {
        (**self).strategies()
    }
}

impl<S: StrategyStore + ?Sized> StrategyStore for Box<S> {
    fn element(&self, strategy: &str, element: &str) -> Result<String, StrategyNotFound> {
        (**self).element(strategy, element)
    }

    fn strategies(&self) -> Vec<String> {
        (**self).strategies()
    }
}

/// The fixed set of elements a page strategy provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    DocType,
    MimeType,
    RootElement,
    Header,
    Body,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::DocType,
        Element::MimeType,
        Element::RootElement,
        Element::Header,
        Element::Body,
    ];

    /// Element name as stored in a page strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::DocType => "doctype",
            Element::MimeType => "mimetype",
            Element::RootElement => "rootelement",
            Element::Header => "header",
            Element::Body => "body",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown element '{}', expected one of: doctype, mimetype, rootelement, header, body",
                    s
                )
            })
    }
}

/// Outcome of a two-step strategy lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The requested strategy provided the element.
    Found(String),
    /// The requested strategy missed; the default strategy provided it.
    Fallback(String),
    /// Neither the requested nor the default strategy provided it.
    Unresolved,
}

impl Resolution {
    /// The resolved value, or the empty string when unresolved.
    pub fn into_value(self) -> String {
        match self {
            Resolution::Found(value) | Resolution::Fallback(value) => value,
            Resolution::Unresolved => String::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

/// Resolves strategy elements with a single fallback to [`DEFAULT_STRATEGY`].
///
/// Nothing is cached: every call queries the store.
#[derive(Debug, Clone)]
pub struct StrategyResolver<S> {
    store: S,
}

impl<S: StrategyStore> StrategyResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up `element` for `strategy`, then for the default strategy.
    pub fn lookup(&self, strategy: &str, element: &str) -> Resolution {
        let primary = match self.store.element(strategy, element) {
            Ok(value) => return Resolution::Found(value),
            Err(e) => e,
        };
        debug!(
            strategy = %strategy,
            element = %element,
            reason = %primary,
            "Falling back to default page strategy"
        );

        match self.store.element(DEFAULT_STRATEGY, element) {
            Ok(value) => Resolution::Fallback(value),
            Err(e) => {
                error!(
                    strategy = %strategy,
                    element = %element,
                    fallback = DEFAULT_STRATEGY,
                    "{}",
                    e
                );
                Resolution::Unresolved
            }
        }
    }

    /// Resolve an element to a string; unresolved elements become `""`.
    pub fn resolve(&self, strategy: &str, element: &str) -> String {
        self.lookup(strategy, element).into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Shared buffer that a scoped subscriber writes formatted events into.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with every tracing event on this thread captured as text.
    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, logs.contents())
    }

    /// Deterministic store that records every query.
    #[derive(Default)]
    struct FakeStore {
        values: HashMap<(String, String), String>,
        queries: Mutex<Vec<(String, String)>>,
    }

    impl FakeStore {
        fn with(mut self, strategy: &str, element: &str, value: &str) -> Self {
            self.values
                .insert((strategy.to_string(), element.to_string()), value.to_string());
            self
        }

        fn queries(&self) -> Vec<(String, String)> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl StrategyStore for FakeStore {
        fn element(&self, strategy: &str, element: &str) -> Result<String, StrategyNotFound> {
            self.queries
                .lock()
                .unwrap()
                .push((strategy.to_string(), element.to_string()));
            self.values
                .get(&(strategy.to_string(), element.to_string()))
                .cloned()
                .ok_or_else(|| StrategyNotFound::new(strategy, element))
        }
    }

    #[test]
    fn test_primary_hit_skips_default() {
        let store = FakeStore::default()
            .with("hbbtv", "mimetype", "application/vnd.hbbtv.xhtml+xml")
            .with("default", "mimetype", "text/html");
        let resolver = StrategyResolver::new(&store);

        assert_eq!(
            resolver.lookup("hbbtv", "mimetype"),
            Resolution::Found("application/vnd.hbbtv.xhtml+xml".into())
        );
        assert_eq!(store.queries().len(), 1);
    }

    #[test]
    fn test_miss_falls_back_to_default() {
        let store = FakeStore::default().with("default", "doctype", "<!DOCTYPE html>");
        let resolver = StrategyResolver::new(&store);

        assert_eq!(
            resolver.lookup("maple", "doctype"),
            Resolution::Fallback("<!DOCTYPE html>".into())
        );
        assert_eq!(
            store.queries(),
            vec![
                ("maple".to_string(), "doctype".to_string()),
                ("default".to_string(), "doctype".to_string()),
            ]
        );
    }

    #[test]
    fn test_double_miss_is_empty_string() {
        let store = FakeStore::default();
        let resolver = StrategyResolver::new(&store);

        assert_eq!(resolver.lookup("maple", "body"), Resolution::Unresolved);
        assert_eq!(resolver.resolve("maple", "body"), "");
    }

    #[test]
    fn test_double_miss_logs_error_with_fields() {
        let store = FakeStore::default();
        let resolver = StrategyResolver::new(&store);

        let (value, logs) = with_captured_logs(|| resolver.resolve("maple", "body"));

        assert_eq!(value, "");
        let line = logs
            .lines()
            .find(|l| l.contains("ERROR"))
            .unwrap_or_else(|| panic!("no error event in {logs:?}"));
        assert!(line.contains("page strategy element not found: default/body"), "{line}");
        assert!(line.contains("strategy=maple"), "{line}");
        assert!(line.contains("element=body"), "{line}");
    }

    #[test]
    fn test_fallback_hit_logs_no_error() {
        let store = FakeStore::default().with("default", "body", "");
        let resolver = StrategyResolver::new(&store);

        let (resolution, logs) = with_captured_logs(|| resolver.lookup("maple", "body"));

        assert_eq!(resolution, Resolution::Fallback(String::new()));
        assert!(!logs.contains("ERROR"), "{logs}");
        assert!(logs.contains("Falling back to default page strategy"), "{logs}");
    }

    #[test]
    fn test_every_call_requeries_store() {
        let store = FakeStore::default().with("html5", "header", "<meta>");
        let resolver = StrategyResolver::new(&store);

        resolver.resolve("html5", "header");
        resolver.resolve("html5", "header");
        assert_eq!(store.queries().len(), 2);
    }

    #[test]
    fn test_empty_strategy_uses_default() {
        let store = FakeStore::default().with("default", "rootelement", "<html>");
        let resolver = StrategyResolver::new(&store);

        assert_eq!(resolver.resolve("", "rootelement"), "<html>");
    }

    #[test]
    fn test_element_parse() {
        assert_eq!("doctype".parse::<Element>().unwrap(), Element::DocType);
        assert_eq!("RootElement".parse::<Element>().unwrap(), Element::RootElement);
        assert!("footer".parse::<Element>().is_err());
    }

    #[test]
    fn test_resolution_into_value() {
        assert_eq!(Resolution::Found("a".into()).into_value(), "a");
        assert_eq!(Resolution::Fallback("b".into()).into_value(), "b");
        assert_eq!(Resolution::Unresolved.into_value(), "");
        assert!(!Resolution::Unresolved.is_resolved());
    }
}
