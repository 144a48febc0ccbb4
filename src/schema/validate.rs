//! Validation functions

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;

/// A typed record with a named response shape
pub trait Schema: DeserializeOwned {
    /// Human-readable shape name used in validation errors
    const SHAPE: &'static str;
}

/// Validate one raw record
pub fn validate<T: Schema>(value: JsonValue) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::schema(T::SHAPE, e.to_string()))
}

/// Validate every record of a listing; the first mismatch names its index
pub fn validate_items<T: Schema>(items: Vec<JsonValue>) -> Result<Vec<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| Error::schema(T::SHAPE, format!("item {index}: {e}")))
        })
        .collect()
}
