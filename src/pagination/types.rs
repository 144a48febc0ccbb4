//! Pagination types

use crate::error::Error;
use crate::types::{JsonValue, QueryParams};

/// Where the cursor travels and where it is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSpec {
    /// Query parameter name carrying the cursor
    pub param: String,
    /// Field of the last item the next cursor is read from
    pub field: String,
}

impl CursorSpec {
    /// Create a cursor spec
    pub fn new(param: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            field: field.into(),
        }
    }

    /// `before_timestamp` carrying the last item's `created_at`
    pub fn before_timestamp() -> Self {
        Self::new("before_timestamp", "created_at")
    }

    /// `offset` carrying the last item's `created_at`
    pub fn offset() -> Self {
        Self::new("offset", "created_at")
    }
}

impl Default for CursorSpec {
    fn default() -> Self {
        Self::before_timestamp()
    }
}

/// The cursor of one pagination round: parameter name and its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Query parameter name
    pub key: String,
    /// Rendered cursor value
    pub value: String,
}

/// Progress of a pagination run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Cursor for the next request; `None` before the first page
    pub cursor: Option<Cursor>,
    /// Non-empty pages fetched so far
    pub pages: u32,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Query parameters for the next request: `base` plus the cursor, if any
    pub fn query(&self, base: &QueryParams) -> QueryParams {
        let mut query = base.clone();
        if let Some(cursor) = &self.cursor {
            query.insert(cursor.key.clone(), cursor.value.clone());
        }
        query
    }

    /// Record a non-empty page and advance the cursor
    pub fn advance(&mut self, cursor: Cursor) {
        self.pages += 1;
        self.cursor = Some(cursor);
    }
}

/// Outcome of a pagination run
#[derive(Debug)]
pub struct Collection {
    /// Every item fetched, in upstream order
    pub items: Vec<JsonValue>,
    /// Non-empty pages fetched
    pub pages: u32,
    /// The transport failure that cut the run short, if any
    pub interrupted: Option<Error>,
}

impl Collection {
    /// Whether the run reached the empty terminal page
    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }
}
