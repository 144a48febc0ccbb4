//! Review records

use crate::schema::Schema;
use crate::types::timestamp_to_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewWriter {
    pub username: String,
    pub avatar_url: String,
    pub name: String,
}

/// A review left on a user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub content: String,
    /// Star rating
    pub rating: i64,
    /// Epoch seconds; the pagination cursor
    pub created_at: i64,
    pub writer: ReviewWriter,
}

impl Review {
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.created_at)
    }
}

impl Schema for Review {
    const SHAPE: &'static str = "review";
}
