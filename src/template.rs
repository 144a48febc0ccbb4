//! Path template interpolation
//!
//! Handles `{placeholder}` substitution in endpoint path patterns such as
//! `/requests/{random_key}/interests`. Substituted values are
//! percent-encoded so they always stay within one path segment.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching path placeholders: {name}
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("valid regex"));

/// A placeholder in the template had no value supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPlaceholder(pub String);

/// Render a path template with the given `(name, value)` pairs.
///
/// Extra pairs that match no placeholder are ignored.
pub fn render(template: &str, params: &[(&str, &str)]) -> Result<String, MissingPlaceholder> {
    let mut result = String::with_capacity(template.len());
    let mut last = 0;

    for cap in PLACEHOLDER_REGEX.captures_iter(template) {
        let (Some(full), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let value = params
            .iter()
            .find(|(key, _)| *key == name.as_str())
            .map(|(_, value)| *value)
            .ok_or_else(|| MissingPlaceholder(name.as_str().to_string()))?;

        result.push_str(&template[last..full.start()]);
        result.push_str(&urlencoding::encode(value));
        last = full.end();
    }

    result.push_str(&template[last..]);
    Ok(result)
}

/// Check if a string contains placeholders
pub fn has_placeholders(s: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(s)
}

/// Extract all placeholder names from a template, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect()
}
