//! Device key normalisation.

use regex_lite::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[^a-zA-Z0-9]").expect("static pattern is valid")
});

/// Replace every character outside `[A-Za-z0-9]` with `_` and lowercase the result.
///
/// Used to compare device identifiers where capitalisation and punctuation
/// are not guaranteed to match, e.g. `"Samsung-2013 (EU)"` and `"samsung_2013__eu_"`.
pub fn normalize_key_name(value: &str) -> String {
    NON_ALNUM.replace_all(value, "_").to_lowercase()
}
