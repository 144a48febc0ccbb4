//! Blocking client
//!
//! Wraps the async [`Client`](crate::Client) in a current-thread runtime so
//! every operation runs to completion on the calling thread. The
//! rate-limit wait and the pause between pages block the caller.
//!
//! Must not be used from within an async runtime.

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::models::{
    ChatMessage, CurrentUser, FreelanceJob, JobDetail, JobListItem, Review, SessionDetail,
    SessionListItem,
};
use crate::types::{FetchMode, JsonValue, SearchScope};
use tokio::runtime::{Builder, Runtime};

/// Blocking counterpart of [`crate::Client`]
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    /// Create a client against the production API
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let inner = crate::Client::with_config(credentials, config)?;
        Ok(Self {
            inner,
            runtime: runtime()?,
        })
    }

    /// Create a client from the environment, like [`crate::Client::from_env`]
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::from_env()?)
    }

    /// The wrapped async client
    pub fn inner(&self) -> &crate::Client {
        &self.inner
    }

    /// Search the job board, see [`crate::Client::jobs`]
    pub fn jobs(&self, scope: SearchScope, mode: FetchMode) -> Result<Vec<JobListItem>> {
        self.runtime.block_on(self.inner.jobs(scope, mode))
    }

    /// Search the job board as raw JSON
    pub fn jobs_raw(&self, scope: SearchScope, mode: FetchMode) -> Result<Vec<JsonValue>> {
        self.runtime.block_on(self.inner.jobs_raw(scope, mode))
    }

    /// Full view of one job
    pub fn job_details(&self, random_key: &str) -> Result<JobDetail> {
        self.runtime.block_on(self.inner.job_details(random_key))
    }

    /// Express interest in a job; returns the acknowledgment as-is
    pub fn apply_to_job(
        &self,
        random_key: &str,
        message: &str,
        open_to_special_rate: bool,
    ) -> Result<JsonValue> {
        self.runtime.block_on(
            self.inner
                .apply_to_job(random_key, message, open_to_special_rate),
        )
    }

    /// Send a chat message to `username`
    pub fn send_message(&self, username: &str, message: &str) -> Result<ChatMessage> {
        self.runtime
            .block_on(self.inner.send_message(username, message))
    }

    /// Every session
    pub fn sessions(&self) -> Result<Vec<SessionListItem>> {
        self.runtime.block_on(self.inner.sessions())
    }

    /// Every session, as raw JSON
    pub fn sessions_raw(&self) -> Result<Vec<JsonValue>> {
        self.runtime.block_on(self.inner.sessions_raw())
    }

    /// Full view of one session
    pub fn session_details(&self, session_id: &str) -> Result<SessionDetail> {
        self.runtime.block_on(self.inner.session_details(session_id))
    }

    /// The authenticated user
    pub fn me(&self) -> Result<CurrentUser> {
        self.runtime.block_on(self.inner.me())
    }

    /// Every review of `username`, or of the authenticated user.
    ///
    /// Blocks through the pause between pages and any rate-limit wait.
    pub fn reviews(&self, username: Option<&str>) -> Result<Vec<Review>> {
        self.runtime.block_on(self.inner.reviews(username))
    }

    /// Every review, as raw JSON
    pub fn reviews_raw(&self, username: Option<&str>) -> Result<Vec<JsonValue>> {
        self.runtime.block_on(self.inner.reviews_raw(username))
    }

    /// Every solved freelance job
    pub fn freelance_jobs(&self) -> Result<Vec<FreelanceJob>> {
        self.runtime.block_on(self.inner.freelance_jobs())
    }

    /// Every solved freelance job, as raw JSON
    pub fn freelance_jobs_raw(&self) -> Result<Vec<JsonValue>> {
        self.runtime.block_on(self.inner.freelance_jobs_raw())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Client")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

fn runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the blocking runtime")
}
