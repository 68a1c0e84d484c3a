use backon::ExponentialBuilder;
use std::time::Duration;

/// Builds the backoff policy for one call's retry loop
///
/// Delays follow `base_delay * 2^attempt` (attempt 0-indexed for the first
/// retry), capped at 60s, with no jitter so the schedule stays exact. The
/// built iterator yields `max_retries` delays, giving `max_retries + 1`
/// total attempts including the original try.
#[must_use]
pub fn backoff_policy(base_delay: Duration, max_retries: usize) -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(base_delay)
        .with_max_delay(Duration::from_secs(60))
        .with_factor(2.0)
        .with_max_times(max_retries)
}

/// Determines if an HTTP status code should trigger a retry
///
/// Retries on: 429 and 5xx. Other 4xx codes indicate the request itself
/// is wrong and will not succeed on retry.
#[must_use]
pub const fn is_retryable_status(code: u16) -> bool {
    matches!(code, 429 | 500..=599)
}
