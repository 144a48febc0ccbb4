//! Job (mentoring request) records

use crate::schema::Schema;
use crate::types::timestamp_to_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of help a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    OneOnOne,
    Longterm,
    OfflineHelp,
    CodeReview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub url_string: String,
}

/// Poster of a request, as shown in the search listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobUser {
    pub name: String,
    pub username: String,
    pub small_avatar_url: String,
}

/// Poster of a request on the detail view, which adds the time zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetailUser {
    pub name: String,
    pub username: String,
    pub small_avatar_url: String,
    /// Human-readable time zone, e.g. `(GMT+01:00) Berlin`
    pub time_zone_display: String,
}

/// One entry of the job search listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListItem {
    /// Public identifier used in job URLs
    pub random_key: String,
    pub title: String,
    /// Description written by the poster
    pub body: String,
    pub request_type: RequestType,
    /// Lifecycle state, e.g. `open` or `closed`
    pub aasm_state: String,
    /// Budget range as displayed, e.g. `$50 - $100`
    pub estimated_budget: String,
    /// Epoch seconds; the pagination cursor
    pub created_at: i64,
    pub is_featured: bool,
    /// Posted with the paid recruiter add-on
    pub has_recruiter_addon: bool,
    pub user: JobUser,
    pub categories: Vec<Category>,
    /// Mentors who have already applied
    pub interest_count: i64,
    /// Whether the authenticated mentor has opened it
    pub read: bool,
}

impl JobListItem {
    /// Posting time
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.created_at)
    }
}

impl Schema for JobListItem {
    const SHAPE: &'static str = "job list item";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub kind: String,
    pub description: String,
    pub estimated_length: String,
}

/// Full view of a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub random_key: String,
    pub title: String,
    pub body: String,
    pub request_type: RequestType,
    pub aasm_state: String,
    pub estimated_budget: String,
    pub created_at: i64,
    pub is_featured: bool,
    pub has_recruiter_addon: bool,
    pub user: JobDetailUser,
    pub categories: Vec<Category>,
    /// Skipped by the authenticated mentor
    pub skipped: bool,
    pub reported_as_homework: bool,
    /// Whether `apply_to_job` is currently allowed
    pub can_express_interest: bool,
    /// Set once the authenticated mentor has applied
    pub interest: Option<String>,
    pub detail: JobDetails,
    /// Discounted rate offered by the poster, if any
    pub special_rate: Option<String>,
}

impl JobDetail {
    /// Posting time
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.created_at)
    }
}

impl Schema for JobDetail {
    const SHAPE: &'static str = "job detail";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInterestUser {
    pub online: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInterestRequest {
    pub random_key: String,
    pub user: JobInterestUser,
}

/// Acknowledgment returned after applying to a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInterestResponse {
    pub request: JobInterestRequest,
}

impl Schema for JobInterestResponse {
    const SHAPE: &'static str = "job interest response";
}
