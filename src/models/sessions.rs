//! Session (lesson) records

use crate::schema::Schema;
use crate::types::timestamp_to_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMentee {
    pub small_avatar_url: String,
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub username: String,
    pub small_avatar_url: String,
    pub first_name: String,
    pub time_zone_region: String,
    pub time_zone_offset: i64,
}

/// Review the mentor left for the mentee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorReview {
    pub rating: i64,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReview {
    pub rating: i64,
    pub content: String,
    pub random_key: String,
    #[serde(default)]
    pub success_review: Option<String>,
}

/// One entry of the session listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionListItem {
    pub id: String,
    /// Billed duration in seconds
    pub length: i64,
    pub legacy: bool,
    pub aasm_state: String,
    pub init_cost: String,
    pub cost: String,
    /// Free portion of the session in seconds
    pub free_length: i64,
    /// Epoch seconds; the pagination cursor
    pub created_at: i64,
    pub mentee: SessionMentee,
}

impl SessionListItem {
    /// Creation time
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.created_at)
    }
}

impl Schema for SessionListItem {
    const SHAPE: &'static str = "session";
}

/// Full view of a single session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetail {
    pub id: String,
    pub length: i64,
    pub legacy: bool,
    pub aasm_state: String,
    pub init_cost: String,
    pub cost: String,
    /// Epoch seconds
    pub started_at: i64,
    /// Epoch seconds
    pub finished_at: i64,
    pub schedule_rate: String,
    pub paid: bool,
    pub has_invoice_question: bool,
    pub total_cost: String,
    pub tip_amount: String,
    pub payment_failure: bool,
    pub survey_is_filled: bool,
    #[serde(default)]
    /// Mentee's review, absent until one is written
    pub review: Option<SessionReview>,
    #[serde(default)]
    pub review_from_mentor: Option<MentorReview>,
    pub mentor: SessionUser,
    pub mentee: SessionUser,
    /// Mentor's share after fees
    pub earnings: String,
    pub is_partial_refundable: bool,
    pub is_full_refundable: bool,
    pub is_refunded: bool,
}

impl SessionDetail {
    /// Time the session ended
    pub fn finished(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.finished_at)
    }
}

impl Schema for SessionDetail {
    const SHAPE: &'static str = "session detail";
}
