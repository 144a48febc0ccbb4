#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

//! # Codementor API client
//!
//! An authenticated client for the private web API behind codementor.io:
//! the job board, sessions, reviews, freelance jobs, job applications and
//! chat.
//!
//! ## Features
//!
//! - **Cookie Authentication**: The `ACCESS_TOKEN` / `REFRESH_TOKEN` pair of a logged-in web session
//! - **Rate Limit Handling**: HTTP 429 is absorbed by waiting and retrying
//! - **Cursor Pagination**: Listings are walked until an empty page
//! - **Typed Records**: Responses validated into serde models, or raw JSON
//! - **Blocking Facade**: [`blocking::Client`] for synchronous callers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use codementor_api::{Client, FetchMode, Result, SearchScope};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads CODEMENTOR_ACCESS_TOKEN / CODEMENTOR_REFRESH_TOKEN
//!     let client = Client::from_env()?;
//!
//!     for job in client.jobs(SearchScope::All, FetchMode::FirstPage).await? {
//!         println!("{} {}", job.random_key, job.title);
//!     }
//!
//!     let reviews = client.reviews(None).await?;
//!     println!("{} reviews", reviews.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Client operations                     │
//! │  jobs  job_details  apply_to_job  send_message  sessions │
//! │  session_details  reviews  freelance_jobs  me            │
//! └──────────────────────────────────────────────────────────┘
//!          │                 │                  │
//! ┌────────┴───────┬─────────┴────────┬─────────┴──────────┐
//! │   Endpoints    │    Paginator     │      Schema        │
//! ├────────────────┼──────────────────┼────────────────────┤
//! │ name → URL     │ cursor loop      │ JSON → models      │
//! │ {placeholders} │ partial results  │ shape errors       │
//! └────────────────┴────────┬─────────┴────────────────────┘
//!                           │
//!                ┌──────────┴──────────┐
//!                │      Transport      │
//!                │ cookies, headers,   │
//!                │ 429 wait and retry  │
//!                └─────────────────────┘
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Credentials and credential providers
pub mod auth;

/// Path template interpolation
pub mod template;

/// Endpoint registry
pub mod endpoints;

/// HTTP transport with rate-limit handling
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Typed response records
pub mod models;

/// Schema validation of raw responses
pub mod schema;

/// The async API client
pub mod client;

/// Blocking API client
pub mod blocking;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{CredentialProvider, Credentials};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::{FetchMode, JsonValue, Method, QueryParams, SearchScope};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
