//! Freelance job (offline help) records

use crate::schema::Schema;
use crate::types::timestamp_to_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mentor or mentee on a freelance job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelanceParticipant {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub avatar_url: String,
    pub small_avatar_url: String,
    pub time_zone_str: String,
}

/// Review attached to a freelance job; every field may be null
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreelanceReview {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
}

/// A solved freelance job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelanceJob {
    pub id: String,
    pub random_key: String,
    pub title: String,
    pub content: String,
    pub cost: String,
    pub aasm_state: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub delay_payment: bool,
    #[serde(default)]
    pub processing_payout: Option<bool>,
    #[serde(default)]
    pub mentor_comment: Option<String>,
    /// Refund status of the job
    pub refund_state: String,
    #[serde(default)]
    pub deliverable: Option<String>,
    pub code_review_job: bool,
    /// Epoch seconds; the pagination cursor (sent as `offset`)
    pub created_at: i64,
    pub updated_at: i64,
    pub finished_at: i64,
    /// Epoch seconds
    pub solved_at: i64,
    #[serde(default)]
    pub deadline: Option<i64>,
    /// Payout to the mentor
    pub mentor_amount: String,
    #[serde(default)]
    pub commission: Option<String>,
    pub mentor: FreelanceParticipant,
    pub mentee: FreelanceParticipant,
    #[serde(default)]
    pub auto_confirm_at: Option<i64>,
    #[serde(default)]
    pub review: Option<FreelanceReview>,
}

impl FreelanceJob {
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.created_at)
    }

    pub fn solved(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.solved_at)
    }
}

impl Schema for FreelanceJob {
    const SHAPE: &'static str = "freelance job";
}
