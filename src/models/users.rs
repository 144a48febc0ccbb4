//! The authenticated user

use crate::schema::Schema;
use serde::{Deserialize, Serialize};

/// Response of the `me` endpoint; only the fields the client relies on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Schema for CurrentUser {
    const SHAPE: &'static str = "current user";
}
