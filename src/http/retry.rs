//! Retry policies for GraphQL calls.
//!
//! A create-token mutation is not idempotent, so the transport submits it
//! exactly once and reports whatever happened. Read-side queries may opt
//! into capped exponential backoff.

use std::time::Duration;

/// Retry policy for a single GraphQL call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Single best-effort attempt. Every mutation uses this.
    None,
    /// Retry transport failures and 429/502/503/504 with backoff.
    /// Safe for queries only.
    Idempotent,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::None
    }
}

/// Backoff schedule for idempotent retries.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retry attempts after the initial call.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
    /// Whether to randomize each delay within a ±25% band.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(8),
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Delay before retry number `attempt` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 1u64 << attempt.min(16);
        let base_ms = self.base_delay.as_millis() as u64;
        let capped = base_ms
            .saturating_mul(factor)
            .min(self.max_delay.as_millis() as u64);

        let final_ms = if self.jitter {
            let spread = capped / 4;
            let low = capped - spread;
            low + rand::random::<u64>() % (2 * spread + 1)
        } else {
            capped
        };

        Duration::from_millis(final_ms)
    }
}

/// Statuses worth retrying when the call is idempotent.
pub fn retryable_status(status: u16) -> bool {
    matches!(status, 429 | 502 | 503 | 504)
}
