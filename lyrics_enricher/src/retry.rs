use std::future::Future;
use std::time::Duration;

use anyhow::Result;

/// A bounded retry policy: at most `max_attempts` tries with a fixed
/// (non-exponential) `delay` between them.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

/// Runs `op` up to `policy.max_attempts` times, sleeping `policy.delay`
/// between attempts.
///
/// Returns the first `Ok` value. Once every attempt has failed the error is
/// swallowed and `None` is returned: failures are reported on the console
/// only and never propagate to the caller.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 1..=policy.max_attempts {
        match op().await {
            Ok(value) => return Some(value),
            Err(err) => {
                println!("Attempt {attempt} failed: {err:#}");
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
    }
    println!("All attempts failed.");
    None
}
