//! Retry policies for HTTP requests.

use crate::error::ApiError;
use std::future::Future;
use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt.
    None,
    /// Retry transport failures and 5xx with [`RetryConfig::default`].
    #[default]
    Transient,
    /// Same classification with caller-provided bounds.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// The effective config; `None` means a single attempt.
    pub fn config(&self) -> RetryConfig {
        match self {
            RetryPolicy::None => RetryConfig {
                max_retries: 0,
                delay: Duration::ZERO,
            },
            RetryPolicy::Transient => RetryConfig::default(),
            RetryPolicy::Custom(c) => c.clone(),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Fixed delay before every retry.
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryConfig {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }
}

/// Everything except a 4xx response or a malformed URL is worth another attempt.
pub fn is_retryable(err: &ApiError) -> bool {
    !err.is_terminal()
}

/// Run `attempt` until it succeeds, fails terminally, or the bound is used up.
///
/// The last error is returned unchanged.
pub async fn with_retry<T, F, Fut>(
    config: &RetryConfig,
    label: &str,
    mut attempt: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut retries = 0;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) if retries < config.max_retries && is_retryable(&e) => {
                retries += 1;
                tracing::debug!(
                    attempt = retries,
                    max = config.max_retries,
                    delay_ms = config.delay.as_millis() as u64,
                    error = %e,
                    "Retrying request to {}",
                    label
                );
                if !config.delay.is_zero() {
                    futures_timer::Delay::new(config.delay).await;
                }
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn status(code: i32) -> ApiError {
        ApiError::Network {
            code,
            description: format!("status {code}"),
        }
    }

    fn fast(max_retries: u32) -> RetryConfig {
        RetryConfig::new(max_retries, Duration::ZERO)
    }

    #[test]
    fn test_retry_policy_default_is_transient() {
        let config = RetryPolicy::default().config();
        assert_eq!(config.max_retries, 10);
        assert_eq!(config.delay, Duration::from_secs(5));
    }

    #[test]
    fn test_none_policy_makes_one_attempt() {
        assert_eq!(RetryPolicy::None.config().max_retries, 0);
    }

    #[test]
    fn test_404_is_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), _> = tokio_test::block_on(with_retry(&fast(10), "test", || {
            calls.set(calls.get() + 1);
            async { Err(status(404)) }
        }));
        assert_eq!(calls.get(), 1);
        assert!(matches!(result, Err(ApiError::Network { code: 404, .. })));
    }

    #[test]
    fn test_bad_url_is_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), _> = tokio_test::block_on(with_retry(&fast(10), "test", || {
            calls.set(calls.get() + 1);
            async { Err(status(crate::network::codes::BAD_URL)) }
        }));
        assert_eq!(calls.get(), 1);
        assert!(matches!(result, Err(ApiError::Network { code: -1000, .. })));
    }

    #[test]
    fn test_500_is_retried_up_to_bound() {
        let calls = Cell::new(0);
        let result: Result<(), _> = tokio_test::block_on(with_retry(&fast(10), "test", || {
            calls.set(calls.get() + 1);
            async { Err(status(500)) }
        }));
        assert_eq!(calls.get(), 11);
        assert!(matches!(result, Err(ApiError::Network { code: 500, .. })));
    }

    #[test]
    fn test_transport_error_is_retried_then_succeeds() {
        let calls = Cell::new(0);
        let result = tokio_test::block_on(with_retry(&fast(3), "test", || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err(status(crate::network::codes::CONNECTION_LOST))
                } else {
                    Ok(n)
                }
            }
        }));
        assert_eq!(result.unwrap(), 3);
    }

    #[test]
    fn test_last_error_surfaces_unchanged() {
        let calls = Cell::new(0);
        let result: Result<(), _> = tokio_test::block_on(with_retry(&fast(2), "test", || {
            calls.set(calls.get() + 1);
            let code = 500 + calls.get();
            async move { Err(status(code)) }
        }));
        match result {
            Err(ApiError::Network { code, description }) => {
                assert_eq!(code, 503);
                assert_eq!(description, "status 503");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
