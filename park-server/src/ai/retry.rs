//! Retry policy for external inference calls
//!
//! Attempt *k* that fails with a retryable error is followed by a sleep of
//! `initial_delay * k`, then attempt *k + 1*. Anything else ends the call
//! with [`FlowError::Unavailable`].

use std::future::Future;
use std::time::Duration;

use super::error::{FlowError, InferenceError};

/// Default attempt budget
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default backoff unit
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub is_retryable: fn(&InferenceError) -> bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay: DEFAULT_INITIAL_DELAY,
            is_retryable: InferenceError::is_service_unavailable,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            ..Self::default()
        }
    }

    pub fn with_retryable(mut self, is_retryable: fn(&InferenceError) -> bool) -> Self {
        self.is_retryable = is_retryable;
        self
    }

    /// Delay slept after a failed `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.initial_delay.saturating_mul(attempt)
    }

    /// Run `call` under this policy
    ///
    /// `call` receives the 1-based attempt number.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, FlowError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, InferenceError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match call(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if (self.is_retryable)(&e) && attempt < max_attempts => {
                    let delay = self.delay_after(attempt);
                    tracing::warn!(
                        operation,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Inference attempt failed with 503, retrying: {e}"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(
                        operation,
                        attempts = attempt,
                        "Inference failed after {attempt} attempt(s): {e}"
                    );
                    return Err(FlowError::Unavailable {
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }
    }
}
