//! Mock clock for testing.

use crate::application::ports::Clock;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct MockClockState {
    current_time: Instant,
    total_slept: Duration,
}

/// Mock clock for testing.
///
/// Allows tests to control time progression explicitly. `sleep` advances
/// virtual time instead of blocking the thread and records the total slept
/// duration, so tests can assert exactly how long a blocked caller would
/// have waited.
///
/// # Examples
///
/// ```
/// use crpt_gateway::{Clock, MockClock};
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let clock = MockClock::new(start);
///
/// assert_eq!(clock.now(), start);
///
/// clock.advance(Duration::from_secs(10));
/// assert_eq!(clock.now(), start + Duration::from_secs(10));
///
/// clock.sleep(Duration::from_secs(5));
/// assert_eq!(clock.now(), start + Duration::from_secs(15));
/// assert_eq!(clock.slept(), Duration::from_secs(5));
/// ```
///
/// # Thread Safety
///
/// `MockClock` is thread-safe and can be cloned to share across threads;
/// all clones share the same underlying time value.
#[derive(Debug, Clone)]
pub struct MockClock {
    state: Arc<Mutex<MockClockState>>,
}

impl MockClock {
    /// Create a mock clock starting at a specific instant.
    pub fn new(start: Instant) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockClockState {
                current_time: start,
                total_slept: Duration::ZERO,
            })),
        }
    }

    /// Advance the clock by a duration without counting it as sleep.
    pub fn advance(&self, duration: Duration) {
        let mut state = self
            .state
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        state.current_time += duration;
    }

    /// Set the clock to a specific instant.
    pub fn set(&self, instant: Instant) {
        let mut state = self
            .state
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        state.current_time = instant;
    }

    /// Total duration spent in `sleep` calls.
    pub fn slept(&self) -> Duration {
        self.state
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock")
            .total_slept
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.state
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock")
            .current_time
    }

    fn sleep(&self, duration: Duration) {
        let mut state = self
            .state
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        state.current_time += duration;
        state.total_slept += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock_advance_and_set() {
        let start = Instant::now();
        let clock = MockClock::new(start);

        assert_eq!(clock.now(), start);

        clock.advance(Duration::from_secs(10));
        assert_eq!(clock.now(), start + Duration::from_secs(10));

        let new_time = start + Duration::from_secs(100);
        clock.set(new_time);
        assert_eq!(clock.now(), new_time);
    }

    #[test]
    fn test_mock_clock_sleep_advances_and_records() {
        let start = Instant::now();
        let clock = MockClock::new(start);

        clock.sleep(Duration::from_secs(3));
        clock.sleep(Duration::from_secs(4));

        assert_eq!(clock.now(), start + Duration::from_secs(7));
        assert_eq!(clock.slept(), Duration::from_secs(7));

        // advance() does not count as sleep
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.slept(), Duration::from_secs(7));
    }

    #[test]
    fn test_mock_clock_shared_across_clones() {
        let start = Instant::now();
        let clock = MockClock::new(start);
        let clone = clock.clone();

        clone.advance(Duration::from_secs(5));
        assert_eq!(clock.now(), start + Duration::from_secs(5));
    }
}
