//! Endpoint registry module
//!
//! Maps logical operation names to URL templates and resolves them into
//! fully qualified URLs.
//!
//! The table of `(name, path pattern)` pairs is static; a registry is built
//! once per client by prefixing every pattern with the configured base URL
//! and is never mutated afterwards.

mod registry;

pub use registry::{Endpoint, EndpointRegistry, ENDPOINT_TABLE};

#[cfg(test)]
mod tests;
