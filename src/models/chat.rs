//! Chat message records

use crate::schema::Schema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatUser {
    pub timezone_str: String,
    /// Offset from UTC
    pub timezone_offset: i64,
    pub timezone_display: String,
    pub timezone: String,
    pub username: String,
    pub name: String,
    pub first_name: String,
    pub level: String,
    pub role: String,
    pub avatar_url: String,
    pub small_avatar_url: String,
    pub uuid: String,
    /// Average review rating
    pub rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub temp_message_id: Option<String>,
}

/// A sent chat message as echoed back by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub request: MessageRequest,
    #[serde(rename = "type")]
    pub kind: String,
    /// Epoch seconds with sub-second precision
    pub created_at: f64,
    #[serde(default)]
    pub read_at: Option<f64>,
    pub content: String,
    pub chats_path: String,
    pub sender: ChatUser,
    pub receiver: ChatUser,
}

impl Schema for ChatMessage {
    const SHAPE: &'static str = "chat message";
}
