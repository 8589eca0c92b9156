//! Clock adapter for production use.
//!
//! See `MockClock` (in `crate::infrastructure::mocks`) for a controllable
//! test clock whose `sleep` advances virtual time instead of blocking.

use crate::application::ports::Clock;
use std::time::{Duration, Instant};

/// System clock backed by `Instant::now()` and `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock::new();
        let t1 = clock.now();
        clock.sleep(Duration::from_millis(10));
        let t2 = clock.now();

        assert!(t2 - t1 >= Duration::from_millis(10));
    }
}
