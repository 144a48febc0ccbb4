//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Query parameters, kept ordered so request URLs are reproducible
pub type QueryParams = BTreeMap<String, String>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::GET => f.write_str("GET"),
            Method::POST => f.write_str("POST"),
        }
    }
}

// ============================================================================
// Job Search
// ============================================================================

/// Which jobs the search endpoint returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Every open request on the board
    #[default]
    All,
    /// Only requests matched to the authenticated mentor's skills
    Related,
}

impl SearchScope {
    /// Value of the `search_type` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Related => "related",
        }
    }
}

/// How much of a listing to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
    /// One request, the page returned verbatim
    #[default]
    FirstPage,
    /// Follow the cursor until an empty page
    All,
}

// ============================================================================
// Utilities
// ============================================================================

/// Render a scalar JSON value as a query parameter value.
///
/// Returns `None` for null, arrays and objects.
pub fn scalar_to_query(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Convert an epoch-seconds timestamp from the API into a UTC datetime
pub fn timestamp_to_datetime(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_conversion() {
        let get: reqwest::Method = Method::GET.into();
        assert_eq!(reqwest::Method::GET, get);
        let post: reqwest::Method = Method::POST.into();
        assert_eq!(reqwest::Method::POST, post);
    }

    #[test]
    fn test_method_default() {
        assert_eq!(Method::default(), Method::GET);
        assert_eq!(Method::POST.to_string(), "POST");
    }

    #[test]
    fn test_search_scope() {
        assert_eq!(SearchScope::All.as_str(), "all");
        assert_eq!(SearchScope::Related.as_str(), "related");

        let scope: SearchScope = serde_json::from_str("\"related\"").unwrap();
        assert_eq!(scope, SearchScope::Related);
    }

    #[test]
    fn test_scalar_to_query() {
        assert_eq!(scalar_to_query(&json!(1_700_000_000)), Some("1700000000".into()));
        assert_eq!(scalar_to_query(&json!("abc")), Some("abc".into()));
        assert_eq!(scalar_to_query(&json!(1.5)), Some("1.5".into()));
        assert_eq!(scalar_to_query(&json!(null)), None);
        assert_eq!(scalar_to_query(&json!({"a": 1})), None);
    }

    #[test]
    fn test_timestamp_to_datetime() {
        let dt = timestamp_to_datetime(0).unwrap();
        assert_eq!(dt.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
    }
}
