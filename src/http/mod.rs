//! HTTP client layer: `LemmyHttp` with a shared retry policy.

pub mod client;
pub mod retry;

pub use client::{decode, LemmyHttp};
pub use retry::{is_retryable, with_retry, RetryConfig, RetryPolicy};
