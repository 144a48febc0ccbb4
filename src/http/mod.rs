//! HTTP transport module
//!
//! Performs single authenticated calls against the API.
//!
//! # Features
//!
//! - **Cookie Authentication**: The credential pair travels as cookies
//! - **Web Client Headers**: Fixed Accept / Origin / Referer / X-Requested-From set
//! - **Rate Limit Absorption**: HTTP 429 is retried after a fixed wait, without limit
//! - **Injectable Sleeps**: Waits go through a [`Sleeper`] so they can be observed

mod client;
mod sleep;
mod transport;

pub use client::HttpTransport;
pub use sleep::{Sleeper, TokioSleeper};
pub use transport::{RequestConfig, Transport};

#[cfg(test)]
mod tests;
