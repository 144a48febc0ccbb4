//! The API client
//!
//! [`Client`] composes the endpoint registry, a transport and a paginator,
//! and exposes one method per API operation (see `operations.rs`).
//!
//! Requests are issued strictly one at a time. A client exclusively owns
//! its HTTP session and credential cookies; separate clients share
//! nothing.

mod operations;

use crate::auth::{CredentialProvider, Credentials};
use crate::config::ClientConfig;
use crate::endpoints::EndpointRegistry;
use crate::error::Result;
use crate::http::{HttpTransport, Sleeper, TokioSleeper, Transport};
use crate::pagination::Paginator;
use std::sync::Arc;

/// Authenticated client for the Codementor API
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    endpoints: EndpointRegistry,
    paginator: Paginator,
}

impl Client {
    /// Create a client against the production API
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let sleeper: Arc<dyn Sleeper> = Arc::new(TokioSleeper);
        let transport = HttpTransport::with_sleeper(&credentials, &config, sleeper.clone())?;
        Self::with_transport(Arc::new(transport), sleeper, &config)
    }

    /// Create a client from `CODEMENTOR_ACCESS_TOKEN` / `CODEMENTOR_REFRESH_TOKEN`,
    /// with config overrides from the environment
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::from_env()?)
    }

    /// Create a client with credentials obtained from `provider`
    pub async fn from_provider(
        provider: &dyn CredentialProvider,
        config: ClientConfig,
    ) -> Result<Self> {
        let credentials = provider.credentials().await?;
        Self::with_config(credentials, config)
    }

    /// Assemble a client around an existing transport
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        sleeper: Arc<dyn Sleeper>,
        config: &ClientConfig,
    ) -> Result<Self> {
        let endpoints = EndpointRegistry::new(&config.base_url)?;
        let paginator = Paginator::new(transport.clone(), sleeper, config.page_delay);

        Ok(Self {
            transport,
            endpoints,
            paginator,
        })
    }

    /// Endpoint registry the client resolves URLs with
    pub fn endpoints(&self) -> &EndpointRegistry {
        &self.endpoints
    }

    /// Transport used for single calls
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Paginator used for listings
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.endpoints.base_url())
            .field("paginator", &self.paginator)
            .finish_non_exhaustive()
    }
}
