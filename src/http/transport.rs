//! Transport trait and per-request configuration

use crate::error::Result;
use crate::types::{JsonValue, Method, QueryParams};
use async_trait::async_trait;

/// Configuration for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestConfig {
    /// Query parameters
    pub query: QueryParams,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Replace all query parameters
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Issues one authenticated call and returns the decoded JSON body.
///
/// Implementations absorb rate limiting themselves; any other error status
/// surfaces as `Error::RequestFailed`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to a fully resolved URL
    async fn send(&self, method: Method, url: &str, request: RequestConfig) -> Result<JsonValue>;

    /// Send a GET request
    async fn get(&self, url: &str, query: QueryParams) -> Result<JsonValue> {
        self.send(Method::GET, url, RequestConfig::new().with_query(query))
            .await
    }

    /// Send a POST request with a JSON body
    async fn post(&self, url: &str, body: JsonValue) -> Result<JsonValue> {
        self.send(Method::POST, url, RequestConfig::new().json(body))
            .await
    }
}
