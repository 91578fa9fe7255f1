//! Bounded retry policy with a deterministic exponential backoff schedule.
//!
//! The schedule is a pure function of the attempt index; suspension is
//! delegated to a [`Sleeper`] so tests can observe delays without real timers.

use std::time::Duration;

/// Default number of attempts (initial request included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default delay before the second attempt.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for retry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay inserted after the first failed attempt; doubles after each failure.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Number of attempts actually made. Zero is treated as one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Whether `attempt` (zero-based) is the final allowed attempt.
    pub fn is_last_attempt(&self, attempt: u32) -> bool {
        attempt + 1 >= self.attempts()
    }

    /// Delay to wait after attempt `attempt` (zero-based) fails: `base * 2^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor)
    }

    /// All delays inserted between consecutive attempts.
    pub fn schedule(&self) -> Vec<Duration> {
        (0..self.attempts() - 1).map(|a| self.delay_for(a)).collect()
    }
}

/// Suspends the current task between attempts.
#[async_trait::async_trait]
pub trait Sleeper: Send + Sync + 'static {
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait::async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_doubles_from_one_second() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.delay_for(0), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(1), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(4000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(8000));

        assert_eq!(
            policy.schedule(),
            vec![
                Duration::from_millis(1000),
                Duration::from_millis(2000),
                Duration::from_millis(4000),
                Duration::from_millis(8000),
            ]
        );
    }

    #[test]
    fn test_last_attempt_is_index_four_by_default() {
        let policy = RetryPolicy::default();
        assert!(!policy.is_last_attempt(0));
        assert!(!policy.is_last_attempt(3));
        assert!(policy.is_last_attempt(4));
    }

    #[test]
    fn test_zero_attempts_still_makes_one() {
        let policy = RetryPolicy::new(0, Duration::from_millis(10));
        assert_eq!(policy.attempts(), 1);
        assert!(policy.is_last_attempt(0));
        assert!(policy.schedule().is_empty());
    }

    #[test]
    fn test_delay_saturates_instead_of_overflowing() {
        let policy = RetryPolicy::new(100, Duration::from_secs(u64::MAX / 2));
        assert_eq!(policy.delay_for(64), Duration::MAX);
    }

    #[test]
    fn test_tokio_sleeper_waits_for_duration() {
        tokio_test::block_on(async {
            let start = std::time::Instant::now();
            TokioSleeper.sleep(Duration::from_millis(20)).await;
            assert!(start.elapsed() >= Duration::from_millis(20));
        });
    }
}
