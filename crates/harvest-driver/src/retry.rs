//! Bounded retry of state queries over an unreliable probe link.

use std::time::Duration;

/// Retry budget and pacing for a single logical state query.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Number of retries allowed after the initial attempt.
    pub budget: u32,

    /// Rest between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            budget: 8,
            delay: Duration::from_secs(5),
        }
    }
}

/// Runs `query` until it yields anything but a transient communication
/// failure, or the retry budget is exhausted.
///
/// Only the two transmit/receive failure codes are retried (see
/// [StatusCode::is_transient](harvest_probe::StatusCode::is_transient)); a
/// success or any other failure is returned to the caller immediately. An
/// exhausted budget returns the last transient failure, which callers treat
/// as fatal.
pub fn query<T>(
    policy: &RetryPolicy,
    mut query: impl FnMut() -> harvest_probe::Result<T>,
) -> harvest_probe::Result<T> {
    let mut budget = policy.budget;

    loop {
        match query() {
            Err(e) if e.is_transient() => {
                if budget == 0 {
                    return Err(e);
                }
                budget -= 1;

                tracing::debug!(error = %e, remaining = budget, "transient probe failure, retrying");
                std::thread::sleep(policy.delay);
            }
            other => return other,
        }
    }
}
