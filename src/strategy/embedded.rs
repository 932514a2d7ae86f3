//! Page strategies compiled into the binary.

use super::StrategyStore;
use crate::error::StrategyNotFound;

/// Built-in strategy content, embedded at compile time.
pub mod builtin {
    pub mod default {
        pub const DOCTYPE: &str = include_str!("../../strategies/default/doctype");
        pub const MIMETYPE: &str = include_str!("../../strategies/default/mimetype");
        pub const ROOTELEMENT: &str = include_str!("../../strategies/default/rootelement");
        pub const HEADER: &str = include_str!("../../strategies/default/header");
        pub const BODY: &str = include_str!("../../strategies/default/body");
    }

    pub mod hbbtv {
        pub const DOCTYPE: &str = include_str!("../../strategies/hbbtv/doctype");
        pub const MIMETYPE: &str = include_str!("../../strategies/hbbtv/mimetype");
        pub const ROOTELEMENT: &str = include_str!("../../strategies/hbbtv/rootelement");
        pub const HEADER: &str = include_str!("../../strategies/hbbtv/header");
        pub const BODY: &str = include_str!("../../strategies/hbbtv/body");
    }
}

const STRATEGIES: [&str; 2] = ["default", "hbbtv"];

/// Store backed by the built-in strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStrategyStore;

impl EmbeddedStrategyStore {
    pub fn new() -> Self {
        Self
    }

    fn lookup(strategy: &str, element: &str) -> Option<&'static str> {
        let value = match (strategy, element) {
            ("default", "doctype") => builtin::default::DOCTYPE,
            ("default", "mimetype") => builtin::default::MIMETYPE,
            ("default", "rootelement") => builtin::default::ROOTELEMENT,
            ("default", "header") => builtin::default::HEADER,
            ("default", "body") => builtin::default::BODY,
            ("hbbtv", "doctype") => builtin::hbbtv::DOCTYPE,
            ("hbbtv", "mimetype") => builtin::hbbtv::MIMETYPE,
            ("hbbtv", "rootelement") => builtin::hbbtv::ROOTELEMENT,
            ("hbbtv", "header") => builtin::hbbtv::HEADER,
            ("hbbtv", "body") => builtin::hbbtv::BODY,
            _ => return None,
        };
        Some(value)
    }
}

impl StrategyStore for EmbeddedStrategyStore {
    fn element(&self, strategy: &str, element: &str) -> Result<String, StrategyNotFound> {
        Self::lookup(strategy, element)
            .map(str::to_string)
            .ok_or_else(|| StrategyNotFound::new(strategy, element))
    }

    fn strategies(&self) -> Vec<String> {
        STRATEGIES.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Element;

    #[test]
    fn test_default_strategy_is_html5() {
        let store = EmbeddedStrategyStore::new();
        assert_eq!(store.element("default", "doctype").unwrap().trim(), "<!DOCTYPE html>");
        assert_eq!(store.element("default", "mimetype").unwrap().trim(), "text/html");
        assert_eq!(store.element("default", "rootelement").unwrap().trim(), "<html>");
        assert_eq!(store.element("default", "header").unwrap().trim(), "");
        assert_eq!(store.element("default", "body").unwrap().trim(), "");
    }

    #[test]
    fn test_every_builtin_has_every_element() {
        let store = EmbeddedStrategyStore::new();
        for strategy in store.strategies() {
            for element in Element::ALL {
                assert!(
                    store.element(&strategy, element.as_str()).is_ok(),
                    "{strategy}/{element} missing"
                );
            }
        }
    }

    #[test]
    fn test_unknown_strategy_not_found() {
        let err = EmbeddedStrategyStore::new()
            .element("maple", "doctype")
            .unwrap_err();
        assert_eq!(err, StrategyNotFound::new("maple", "doctype"));
    }

    #[test]
    fn test_hbbtv_mimetype() {
        let store = EmbeddedStrategyStore::new();
        assert_eq!(
            store.element("hbbtv", "mimetype").unwrap().trim(),
            "application/vnd.hbbtv.xhtml+xml"
        );
    }
}
