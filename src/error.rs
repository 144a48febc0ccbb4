//! Error types for the Codementor client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Codementor client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Credential Errors
    // ============================================================================
    #[error("Missing required credentials: {missing}")]
    MissingCredentials { missing: String },

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },

    // ============================================================================
    // Endpoint Errors
    // ============================================================================
    #[error("Unknown endpoint: {name}")]
    UnknownEndpoint { name: String },

    #[error("Endpoint '{endpoint}' requires path parameter '{parameter}'")]
    MissingPathParameter { endpoint: String, parameter: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Last item of page has no usable cursor field '{field}'")]
    MissingCursorField { field: String },

    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Schema validation failed for {shape}: {message}")]
    SchemaValidation { shape: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing credentials error
    pub fn missing_credentials(missing: impl Into<String>) -> Self {
        Self::MissingCredentials {
            missing: missing.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a request failure from a non-2xx response
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            body: body.into(),
        }
    }

    /// Create an unexpected response error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            message: message.into(),
        }
    }

    /// Create an unknown endpoint error
    pub fn unknown_endpoint(name: impl Into<String>) -> Self {
        Self::UnknownEndpoint { name: name.into() }
    }

    /// Create a missing path parameter error
    pub fn missing_path_param(endpoint: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingPathParameter {
            endpoint: endpoint.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a schema validation error
    pub fn schema(shape: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaValidation {
            shape: shape.into(),
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether a pagination run absorbs this error into a partial result.
    ///
    /// Only transport-level failures qualify: error statuses, network
    /// errors and undecodable response bodies.
    pub fn interrupts_pagination(&self) -> bool {
        matches!(
            self,
            Error::RequestFailed { .. } | Error::Http(_) | Error::JsonParse(_)
        )
    }
}

/// Result type alias for the Codementor client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_value("timeout", "expected whole seconds");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'timeout': expected whole seconds"
        );

        let err = Error::request_failed(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::missing_path_param("job detail", "random_key");
        assert_eq!(
            err.to_string(),
            "Endpoint 'job detail' requires path parameter 'random_key'"
        );

        let err = Error::schema("review", "missing field `rating`");
        assert_eq!(
            err.to_string(),
            "Schema validation failed for review: missing field `rating`"
        );
    }

    #[test]
    fn test_interrupts_pagination() {
        assert!(Error::request_failed(500, "").interrupts_pagination());
        assert!(Error::request_failed(403, "forbidden").interrupts_pagination());

        let bad_json = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(Error::from(bad_json).interrupts_pagination());

        assert!(!Error::unknown_endpoint("nope").interrupts_pagination());
        assert!(!Error::missing_path_param("reviews", "username").interrupts_pagination());
        assert!(!Error::MissingCursorField {
            field: "created_at".into()
        }
        .interrupts_pagination());
        assert!(!Error::unexpected("object page").interrupts_pagination());
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::request_failed(502, "").status(), Some(502));
        assert_eq!(Error::auth("x").status(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::auth("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Authentication failed: inner"));
    }
}
