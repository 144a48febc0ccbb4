//! Pagination module
//!
//! Collects the full result set of a cursor-paginated listing.
//!
//! # Overview
//!
//! Every list endpoint of the API returns a bare JSON array. The next page
//! is requested by sending a field of the last item back as a query
//! parameter (`before_timestamp=<created_at>` or `offset=<created_at>`).
//! An empty array ends the listing.
//!
//! Transport failures mid-run do not fail the collection: the items
//! gathered so far are returned as a partial result. Single-call
//! operations elsewhere in the crate propagate the same failures.

mod paginator;
mod types;

pub(crate) use paginator::into_page;
pub use paginator::Paginator;
pub use types::{Collection, Cursor, CursorSpec, PaginationState};
