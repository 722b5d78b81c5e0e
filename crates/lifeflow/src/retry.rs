//! Bounded exponential backoff for flaky remote writes.
//!
//! The Todoist write endpoint intermittently fails with 5xx responses that
//! succeed when the identical request is repeated, so saves are retried.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{FlowError, Result};

/// Retries allowed after the first attempt.
pub const MAX_RETRIES: u32 = 6;

/// Retry schedule: the delay before retry `i` (0-based) is `base_delay * 2^i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay before the given retry. Derived from the retry count only, with no
    /// cap and no jitter.
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }

    /// Total attempts including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Run `operation` until it succeeds or the retry budget is spent.
    ///
    /// Every error is treated as transient. On exhaustion the last error is
    /// logged and [`FlowError::GaveUp`] is returned.
    pub async fn run<T, F, Fut>(&self, action: &str, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut retry = 0;

        loop {
            match operation().await {
                Ok(value) => {
                    if retry > 0 {
                        debug!(action, retries = retry, "Succeeded after retrying");
                    }
                    return Ok(value);
                }
                Err(e) if retry >= self.max_retries => {
                    warn!(action, error = %e, "Giving up after {} attempts", retry + 1);
                    return Err(FlowError::GaveUp {
                        attempts: retry + 1,
                    });
                }
                Err(e) => {
                    let delay = self.delay_for(retry);
                    warn!(
                        action,
                        error = %e,
                        "Couldn't {action}, trying again in {}s.",
                        delay.as_secs()
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
            }
        }
    }
}
