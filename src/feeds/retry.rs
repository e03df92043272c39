//! Retry logic utilities for feed operations
//!
//! Transient failures (transport errors, 429, 5xx) are retried with capped
//! exponential backoff. Anything else is returned to the caller immediately.

use crate::config::MempoolConfig;
use crate::errors::{FeedError, FeedResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, warn};

/// Calculate next backoff duration using exponential backoff with a maximum cap
///
/// `new_backoff = min(current_backoff * multiplier, max_backoff)`
///
/// # Example
/// ```
/// use std::time::Duration;
/// use tiered_fee_calculator::feeds::calculate_next_backoff;
///
/// let backoff = Duration::from_millis(100);
/// let next = calculate_next_backoff(backoff, 2.0, 30);
/// assert_eq!(next, Duration::from_millis(200));
/// ```
pub fn calculate_next_backoff(
    current_backoff: Duration,
    multiplier: f64,
    max_backoff_seconds: u64,
) -> Duration {
    Duration::from_millis((current_backoff.as_millis() as f64 * multiplier) as u64)
        .min(Duration::from_secs(max_backoff_seconds))
}

/// Retry settings for one feed
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: usize,
    pub initial_backoff: Duration,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl From<&MempoolConfig> for RetryPolicy {
    fn from(config: &MempoolConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            backoff_multiplier: config.backoff_multiplier,
            max_backoff_seconds: config.max_backoff_seconds,
        }
    }
}

/// Run `attempt` until it succeeds, fails permanently, or retries run out
///
/// Exhausting the retries yields `FeedError::MaxRetriesExceeded` naming
/// `operation`.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    operation: &str,
    mut attempt: F,
) -> FeedResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = FeedResult<T>>,
{
    let mut backoff = policy.initial_backoff;
    let mut retries = 0;

    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_transient() => return Err(e),
            Err(e) if retries >= policy.max_retries => {
                error!(
                    "{} failed after {} attempts: {}",
                    operation,
                    retries + 1,
                    e
                );
                return Err(FeedError::MaxRetriesExceeded {
                    operation: operation.to_string(),
                });
            }
            Err(e) => {
                retries += 1;
                warn!(
                    "{} failed (retry {}/{} in {:?}): {}",
                    operation, retries, policy.max_retries, backoff, e
                );
                sleep(backoff).await;
                backoff = calculate_next_backoff(
                    backoff,
                    policy.backoff_multiplier,
                    policy.max_backoff_seconds,
                );
            }
        }
    }
}
