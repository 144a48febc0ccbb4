//! Endpoint table and registry implementation

use crate::error::{Error, Result};
use crate::template::{self, MissingPlaceholder};
use std::collections::HashMap;
use url::Url;

/// Logical API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    JobDetail,
    JobList,
    JobApply,
    UserChat,
    SessionList,
    SessionDetail,
    Reviews,
    Me,
    FreelanceJobs,
}

/// Static `(endpoint, path pattern)` table, relative to the base URL
pub const ENDPOINT_TABLE: &[(Endpoint, &str)] = &[
    (Endpoint::JobDetail, "/requests/{random_key}?access_as=mentor"),
    (Endpoint::JobList, "/requests/search"),
    (Endpoint::JobApply, "/requests/{random_key}/interests"),
    (Endpoint::UserChat, "/chats/messages/{username}"),
    (Endpoint::SessionList, "/lessons"),
    (Endpoint::SessionDetail, "/lessons/{session_id}"),
    (Endpoint::Reviews, "/users/{username}/reviews"),
    (Endpoint::Me, "/me"),
    (Endpoint::FreelanceJobs, "/offline-helps"),
];

impl Endpoint {
    /// Every endpoint, in table order
    pub fn all() -> impl Iterator<Item = Endpoint> {
        ENDPOINT_TABLE.iter().map(|(endpoint, _)| *endpoint)
    }

    /// Registered name of the endpoint
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::JobDetail => "job detail",
            Endpoint::JobList => "job list",
            Endpoint::JobApply => "job apply",
            Endpoint::UserChat => "user chat",
            Endpoint::SessionList => "session list",
            Endpoint::SessionDetail => "session detail",
            Endpoint::Reviews => "reviews",
            Endpoint::Me => "me",
            Endpoint::FreelanceJobs => "freelance jobs",
        }
    }

    /// Look an endpoint up by its registered name
    pub fn from_name(name: &str) -> Option<Endpoint> {
        Endpoint::all().find(|endpoint| endpoint.name() == name)
    }

    /// Path pattern relative to the base URL
    pub fn path(self) -> &'static str {
        ENDPOINT_TABLE
            .iter()
            .find(|(endpoint, _)| *endpoint == self)
            .map_or("", |(_, path)| *path)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable mapping from endpoint to fully qualified URL template
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    base_url: String,
    templates: HashMap<Endpoint, String>,
}

impl EndpointRegistry {
    /// Build the registry by prefixing every table entry with `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let templates = ENDPOINT_TABLE
            .iter()
            .map(|(endpoint, path)| (*endpoint, format!("{base_url}{path}")))
            .collect();

        Ok(Self {
            base_url,
            templates,
        })
    }

    /// Base URL every template is prefixed with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL template for an endpoint
    pub fn template(&self, endpoint: Endpoint) -> &str {
        self.templates.get(&endpoint).map_or("", String::as_str)
    }

    /// Resolve an endpoint by registered name.
    ///
    /// Fails with `UnknownEndpoint` for unregistered names and with
    /// `MissingPathParameter` when a placeholder has no value.
    pub fn resolve(&self, name: &str, path_params: &[(&str, &str)]) -> Result<String> {
        let endpoint = Endpoint::from_name(name).ok_or_else(|| Error::unknown_endpoint(name))?;
        self.url_for(endpoint, path_params)
    }

    /// Resolve a typed endpoint
    pub fn url_for(&self, endpoint: Endpoint, path_params: &[(&str, &str)]) -> Result<String> {
        let url = template::render(self.template(endpoint), path_params)
            .map_err(|MissingPlaceholder(param)| Error::missing_path_param(endpoint.name(), param))?;
        Url::parse(&url)?;
        Ok(url)
    }
}
