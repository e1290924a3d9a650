//! Boundary retry with exponential backoff and jitter.
//!
//! Only [`PostboxError::StorageUnavailable`] is retried. Every attempt runs
//! under its own timeout, and an attempt that runs out of time counts as
//! storage being unavailable.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::config::RetryConfig;
use crate::{PostboxError, Result};

/// Jitter applied to each backoff delay (±20%).
const JITTER: f64 = 0.2;

/// Resolved retry settings.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub operation_timeout: Duration,
}

impl RetryPolicy {
    /// A policy that runs each operation once.
    pub fn no_retry(operation_timeout: Duration) -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            operation_timeout,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
            operation_timeout: Duration::from_millis(config.operation_timeout_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

/// Run `f` until it succeeds, fails permanently, or retries run out.
///
/// `f` is called once per attempt so each attempt starts from scratch.
pub async fn with_retry<F, Fut, T>(policy: &RetryPolicy, operation: &str, mut f: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    let mut backoff = policy.initial_backoff;

    loop {
        let outcome = match tokio::time::timeout(policy.operation_timeout, f()).await {
            Ok(result) => result,
            Err(_) => Err(PostboxError::StorageUnavailable(format!(
                "{operation} timed out after {:?}",
                policy.operation_timeout
            ))),
        };

        match outcome {
            Err(e) if e.is_transient() && attempt < policy.max_retries => {
                attempt += 1;
                let delay = jittered(backoff);

                warn!(
                    operation,
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Transient storage failure, retrying"
                );

                tokio::time::sleep(delay).await;
                backoff = (backoff * 2).min(policy.max_backoff);
            }
            other => return other,
        }
    }
}

fn jittered(base: Duration) -> Duration {
    if base.is_zero() {
        return base;
    }
    let factor = 1.0 + rand::rng().random_range(-JITTER..JITTER);
    Duration::from_secs_f64(base.as_secs_f64() * factor)
}
