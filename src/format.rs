//! Output formatting utilities for markdown and JSON.

use crate::device::PageFragments;
use serde::{Deserialize, Serialize};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}

/// Format resolved page fragments for one device as markdown.
pub fn format_fragments_markdown(key: &str, fragments: &PageFragments) -> String {
    let mut md = String::new();

    md.push_str(&format!("## Device: {}\n", key));
    let strategy = if fragments.strategy.is_empty() {
        "(unset)"
    } else {
        fragments.strategy.as_str()
    };
    md.push_str(&format!("- **page strategy**: `{}`\n", strategy));
    md.push_str(&format!("- **mimetype**: `{}`\n", fragments.mimetype.trim()));

    for (title, value) in [
        ("Doctype", &fragments.doctype),
        ("Root element", &fragments.root_element),
        ("Header", &fragments.header),
        ("Body", &fragments.body),
    ] {
        md.push_str(&format!("\n### {}\n", title));
        let value = value.trim();
        if value.is_empty() {
            md.push_str("_empty_\n");
        } else {
            md.push_str("```html\n");
            md.push_str(value);
            md.push_str("\n```\n");
        }
    }

    md
}

/// Format resolved page fragments as pretty JSON.
pub fn format_fragments_json(key: &str, fragments: &PageFragments) -> String {
    let value = serde_json::json!({
        "key": key,
        "fragments": fragments,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
