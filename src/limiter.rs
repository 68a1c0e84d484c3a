use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Token-bucket rate limiter pacing outbound requests
///
/// Configured with a permit count and a refill window, it spaces permits
/// `window / requests` apart: concurrent callers sharing one limiter never
/// start two requests closer together than that gap. Callers suspend in
/// [`acquire`](Self::acquire) until their slot arrives; dropping the future
/// (caller cancellation) abandons the wait without blocking anyone else.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Instant>,
}

impl RateLimiter {
    /// Creates a limiter allowing `requests` permits per `window`
    #[must_use]
    pub fn new(requests: u32, window: Duration) -> Self {
        Self {
            interval: window / requests.max(1),
            next_slot: Mutex::new(Instant::now()),
        }
    }

    /// Suspends until a permit is available
    ///
    /// Safe for concurrent use; each caller is assigned the next free slot
    /// under the lock, then sleeps outside it.
    pub async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = (*next).max(now);
            *next = slot + self.interval;
            slot
        };
        tokio::time::sleep_until(slot).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_permit_is_immediate() {
        let limiter = RateLimiter::new(1, Duration::from_secs(10));
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn permits_are_spaced_by_window_over_requests() {
        let limiter = RateLimiter::new(2, Duration::from_millis(100));
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        // Two gaps of 50ms each after the immediate first permit.
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn concurrent_acquisitions_never_share_a_slot() {
        let limiter = std::sync::Arc::new(RateLimiter::new(1, Duration::from_millis(50)));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let limiter = std::sync::Arc::clone(&limiter);
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                Instant::now()
            }));
        }
        let mut starts = Vec::new();
        for h in handles {
            starts.push(h.await.unwrap());
        }
        starts.sort();
        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(45));
        }
    }

    #[tokio::test]
    async fn zero_requests_is_clamped() {
        let limiter = RateLimiter::new(0, Duration::from_millis(10));
        limiter.acquire().await;
        limiter.acquire().await;
    }
}
