//! API operations
//!
//! Single-entity calls and the first-page job search propagate every
//! error. Full listings go through the paginator and return a partial
//! result when a request fails mid-run.

use super::Client;
use crate::endpoints::Endpoint;
use crate::error::Result;
use crate::models::{
    ChatMessage, CurrentUser, FreelanceJob, JobDetail, JobListItem, Review, SessionDetail,
    SessionListItem,
};
use crate::pagination::{into_page, CursorSpec};
use crate::schema::{validate, validate_items};
use crate::types::{FetchMode, JsonValue, QueryParams, SearchScope};
use serde_json::json;
use tracing::debug;

impl Client {
    // ========================================================================
    // Jobs
    // ========================================================================

    /// Search the job board as raw JSON
    pub async fn jobs_raw(&self, scope: SearchScope, mode: FetchMode) -> Result<Vec<JsonValue>> {
        let url = self.endpoints.url_for(Endpoint::JobList, &[])?;
        let params = params(&[("search_type", scope.as_str())]);

        match mode {
            FetchMode::FirstPage => into_page(self.transport.get(&url, params).await?),
            FetchMode::All => {
                self.paginator
                    .collect(&url, &params, &CursorSpec::before_timestamp())
                    .await
            }
        }
    }

    /// Search the job board
    pub async fn jobs(&self, scope: SearchScope, mode: FetchMode) -> Result<Vec<JobListItem>> {
        validate_items(self.jobs_raw(scope, mode).await?)
    }

    /// Full view of one job
    pub async fn job_details(&self, random_key: &str) -> Result<JobDetail> {
        let url = self
            .endpoints
            .url_for(Endpoint::JobDetail, &[("random_key", random_key)])?;
        validate(self.transport.get(&url, QueryParams::new()).await?)
    }

    /// Express interest in a job; returns the provider's acknowledgment as-is
    pub async fn apply_to_job(
        &self,
        random_key: &str,
        message: &str,
        open_to_special_rate: bool,
    ) -> Result<JsonValue> {
        let url = self
            .endpoints
            .url_for(Endpoint::JobApply, &[("random_key", random_key)])?;
        let payload = json!({
            "message": message,
            "open_to_special_rate": open_to_special_rate,
        });

        debug!(random_key, "Applying to job");
        self.transport.post(&url, payload).await
    }

    // ========================================================================
    // Chat
    // ========================================================================

    /// Send a chat message to `username`
    pub async fn send_message(&self, username: &str, message: &str) -> Result<ChatMessage> {
        let url = self
            .endpoints
            .url_for(Endpoint::UserChat, &[("username", username)])?;
        let payload = json!({
            "message": {
                "content": message,
                "request": {"temp_message_id": null},
                "type": "message",
            }
        });

        validate(self.transport.post(&url, payload).await?)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Every session, as raw JSON
    pub async fn sessions_raw(&self) -> Result<Vec<JsonValue>> {
        let url = self.endpoints.url_for(Endpoint::SessionList, &[])?;
        self.paginator
            .collect(&url, &QueryParams::new(), &CursorSpec::before_timestamp())
            .await
    }

    /// Every session
    pub async fn sessions(&self) -> Result<Vec<SessionListItem>> {
        validate_items(self.sessions_raw().await?)
    }

    /// Full view of one session
    pub async fn session_details(&self, session_id: &str) -> Result<SessionDetail> {
        let url = self
            .endpoints
            .url_for(Endpoint::SessionDetail, &[("session_id", session_id)])?;
        validate(self.transport.get(&url, QueryParams::new()).await?)
    }

    // ========================================================================
    // Users and reviews
    // ========================================================================

    /// The authenticated user
    pub async fn me(&self) -> Result<CurrentUser> {
        let url = self.endpoints.url_for(Endpoint::Me, &[])?;
        validate(self.transport.get(&url, QueryParams::new()).await?)
    }

    /// Every review of `username`, as raw JSON.
    ///
    /// Without a username, the authenticated user's own is looked up first.
    pub async fn reviews_raw(&self, username: Option<&str>) -> Result<Vec<JsonValue>> {
        let username = match username {
            Some(username) => username.to_string(),
            None => self.me().await?.username,
        };

        let url = self
            .endpoints
            .url_for(Endpoint::Reviews, &[("username", &username)])?;
        self.paginator
            .collect(&url, &QueryParams::new(), &CursorSpec::before_timestamp())
            .await
    }

    /// Every review of `username` (or of the authenticated user)
    pub async fn reviews(&self, username: Option<&str>) -> Result<Vec<Review>> {
        validate_items(self.reviews_raw(username).await?)
    }

    // ========================================================================
    // Freelance jobs
    // ========================================================================

    /// Every solved freelance job, as raw JSON
    pub async fn freelance_jobs_raw(&self) -> Result<Vec<JsonValue>> {
        let url = self.endpoints.url_for(Endpoint::FreelanceJobs, &[])?;
        self.paginator
            .collect(&url, &params(&[("type", "solved")]), &CursorSpec::offset())
            .await
    }

    /// Every solved freelance job
    pub async fn freelance_jobs(&self) -> Result<Vec<FreelanceJob>> {
        validate_items(self.freelance_jobs_raw().await?)
    }
}

fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
