//! Suspension points
//!
//! The rate-limit wait and the pause between pages are the only places the
//! client suspends. Both go through [`Sleeper`].

use async_trait::async_trait;
use std::time::Duration;

/// Something that can wait for a fixed duration
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
