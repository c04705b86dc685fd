use async_trait::async_trait;
use std::time::Duration;

/// Fixed-duration wait used between attempts.
///
/// Injected into records so tests can swap the real timer for a sleeper
/// that returns immediately or only records the requested durations.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
