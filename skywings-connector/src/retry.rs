//! Exponential backoff for transport failures. HTTP status codes are the
//! caller's concern; only errors from `send()` are retried, and only those
//! the caller's `retryable` predicate accepts.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    fn delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// Whether a failed send of `method` may be repeated. Idempotent methods
/// always may; anything else only when no connection was ever made, since a
/// timed-out POST may already have been applied.
pub fn is_retryable(method: &reqwest::Method, err: &reqwest::Error) -> bool {
    use reqwest::Method;

    let idempotent = matches!(
        *method,
        Method::GET | Method::HEAD | Method::PUT | Method::DELETE | Method::OPTIONS
    );
    idempotent || (err.is_connect() && !err.is_timeout())
}

/// Call `f` up to `max_retries + 1` times, sleeping 1x, 2x, 4x... the base
/// delay between attempts. An error `retryable` rejects is returned at once.
pub async fn retry_send<F, Fut, R>(
    policy: RetryPolicy,
    retryable: R,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
    R: Fn(&reqwest::Error) -> bool,
{
    for attempt in 0..policy.max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) if !retryable(&e) => return Err(e),
            Err(e) => {
                let delay = policy.delay(attempt);
                warn!(
                    attempt = attempt + 1,
                    max_retries = policy.max_retries,
                    "Upstream request failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    f().await
}
