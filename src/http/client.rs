//! reqwest-backed transport
//!
//! Handles:
//! - Attaching the credential cookies and web client headers
//! - Absorbing HTTP 429 with a fixed wait and an identical retry
//! - Classifying every other error status as `RequestFailed`
//! - Decoding the response body as JSON

use super::sleep::{Sleeper, TokioSleeper};
use super::transport::{RequestConfig, Transport};
use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport over a reqwest client carrying the credential cookies
pub struct HttpTransport {
    client: Client,
    rate_limit_wait: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl HttpTransport {
    /// Create a transport that sleeps on the tokio timer
    pub fn new(credentials: &Credentials, config: &ClientConfig) -> Result<Self> {
        Self::with_sleeper(credentials, config, Arc::new(TokioSleeper))
    }

    /// Create a transport with a custom sleeper
    pub fn with_sleeper(
        credentials: &Credentials,
        config: &ClientConfig,
        sleeper: Arc<dyn Sleeper>,
    ) -> Result<Self> {
        let headers = build_headers(credentials, config)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            rate_limit_wait: config.rate_limit_wait,
            sleeper,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    /// Retries on 429 without limit. Under persistent throttling this never
    /// returns.
    async fn send(&self, method: Method, url: &str, request: RequestConfig) -> Result<JsonValue> {
        let mut rate_limited = 0u32;

        loop {
            let mut req = self.client.request(method.into(), url);

            if !request.query.is_empty() {
                req = req.query(&request.query);
            }

            if let Some(ref body) = request.body {
                req = req.json(body);
            }

            let response = req.send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                rate_limited += 1;
                warn!(
                    url,
                    attempt = rate_limited,
                    "Rate limited (429), waiting {}s before retrying",
                    self.rate_limit_wait.as_secs()
                );
                self.sleeper.sleep(self.rate_limit_wait).await;
                continue;
            }

            if status.is_client_error() || status.is_server_error() {
                let body = failure_body(response.text().await, url);
                debug!("Request failed: {} {} -> {}", method, url, status.as_u16());
                return Err(Error::request_failed(status.as_u16(), body));
            }

            debug!("Request succeeded: {} {} -> {}", method, url, status.as_u16());
            let text = response.text().await?;
            return parse_body(&text);
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("rate_limit_wait", &self.rate_limit_wait)
            .finish_non_exhaustive()
    }
}

/// Default header map: configured headers plus the sensitive cookie header
fn build_headers(credentials: &Credentials, config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    for (key, value) in &config.default_headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::invalid_value("default_headers", format!("{key}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::invalid_value("default_headers", format!("{key}: {e}")))?;
        headers.insert(name, value);
    }

    let mut cookie = HeaderValue::from_str(&credentials.cookie_header())
        .map_err(|_| Error::auth("credentials contain characters not allowed in a cookie"))?;
    cookie.set_sensitive(true);
    headers.insert(COOKIE, cookie);

    Ok(headers)
}

/// Body of an error response. A read failure is logged and described in
/// place of the body.
fn failure_body<E: std::fmt::Display>(read: std::result::Result<String, E>, url: &str) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            warn!(url, "Failed to read error response body: {e}");
            format!("<failed to read response body: {e}>")
        }
    }
}

/// Decode a response body; an empty body is JSON `null`
fn parse_body(text: &str) -> Result<JsonValue> {
    if text.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_body_passes_body_through() {
        let read: std::result::Result<String, String> = Ok("not found".to_string());
        assert_eq!(failure_body(read, "http://api.test/me"), "not found");
    }

    #[test]
    fn test_failure_body_describes_read_error() {
        let read: std::result::Result<String, String> = Err("connection reset".to_string());
        assert_eq!(
            failure_body(read, "http://api.test/me"),
            "<failed to read response body: connection reset>"
        );
    }
}
