//! Wall-clock and delay capability.
//!
//! Channels never read the system time or sleep directly; they go through a
//! [`Clock`] so tests can substitute [`ManualClock`] and run without waiting.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use std::time::Duration;

/// Source of timestamps and delays.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;

    /// Suspend for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the system time and the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Deterministic clock for tests.
///
/// `sleep` returns immediately and advances the current time by the requested
/// duration, so timestamps taken after a sleep never go backwards.
#[derive(Debug)]
pub struct ManualClock {
    state: Mutex<ManualState>,
}

#[derive(Debug)]
struct ManualState {
    now: DateTime<Utc>,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    /// Create a clock frozen at the given instant.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            state: Mutex::new(ManualState {
                now: start,
                sleeps: Vec::new(),
            }),
        }
    }

    /// Move the clock forward without recording a sleep.
    pub fn advance(&self, by: Duration) {
        let mut state = self.state.lock();
        state.now = advanced(state.now, by);
    }

    /// Every duration passed to `sleep`, in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.state.lock().sleeps.clone()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.state.lock().now
    }

    async fn sleep(&self, duration: Duration) {
        let mut state = self.state.lock();
        state.sleeps.push(duration);
        state.now = advanced(state.now, duration);
    }
}

/// `now + by`, saturating at the largest representable instant.
fn advanced(now: DateTime<Utc>, by: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(by)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_clock_sleep_advances() {
        let clock = ManualClock::default();
        let start = clock.now();

        clock.sleep(Duration::from_millis(500)).await;
        clock.sleep(Duration::from_millis(250)).await;

        assert_eq!(clock.now() - start, TimeDelta::milliseconds(750));
        assert_eq!(
            clock.sleeps(),
            vec![Duration::from_millis(500), Duration::from_millis(250)]
        );
    }

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::default();
        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now().timestamp(), 2);
        assert!(clock.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_manual_clock_saturates() {
        let clock = ManualClock::default();

        clock.sleep(Duration::MAX).await;
        assert_eq!(clock.now(), DateTime::<Utc>::MAX_UTC);

        clock.advance(Duration::from_secs(1));
        clock.sleep(Duration::from_secs(u64::MAX)).await;
        assert_eq!(clock.now(), DateTime::<Utc>::MAX_UTC);
        assert_eq!(clock.sleeps().len(), 2);
    }

    #[tokio::test]
    async fn test_system_clock_monotonic_enough() {
        let clock = SystemClock;
        let before = clock.now();
        clock.sleep(Duration::from_millis(1)).await;
        assert!(clock.now() >= before);
    }
}
