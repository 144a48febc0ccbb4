//! Schema validation module
//!
//! Converts raw JSON from the API into the typed records of
//! [`crate::models`]. A mismatch fails with `Error::SchemaValidation`
//! naming the response shape, so callers can tell which endpoint's
//! contract changed. The layer is optional: every listing is also
//! available as raw JSON.

mod validate;

pub use validate::{validate, validate_items, Schema};
