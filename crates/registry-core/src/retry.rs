//! Retry policy with exponential backoff
//!
//! [`RetryPolicy::execute`] replays a fallible operation on failure, doubling
//! the delay between attempts. It is mutation-agnostic: the operation is an
//! opaque closure and the error type is generic. The inter-attempt sleep
//! suspends only the calling task; there is no jitter, no delay cap and no
//! cancellation.

use std::fmt::Display;
use std::time::Duration;
use tracing::warn;

/// Exponential-backoff retry policy
///
/// Total attempts are bounded by `max_retries + 1`; delays of
/// `initial_delay, 2x, 4x, ...` are consumed only between failed attempts,
/// never after a success or after the final allowed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
        }
    }

    /// Run `op`, retrying on failure until the retry budget is spent
    ///
    /// On success the result is returned immediately. Once `max_retries`
    /// retries have been consumed, the last error is returned unmodified.
    pub async fn execute<T, E, F>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: Display,
    {
        let mut retries = 0u32;
        let mut delay = self.initial_delay;

        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if retries >= self.max_retries {
                        return Err(err);
                    }

                    warn!(
                        error = %err,
                        retry = retries + 1,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "operation failed, retrying after backoff"
                    );

                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    retries += 1;
                }
            }
        }
    }
}
