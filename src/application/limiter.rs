//! Blocking admission control over the fixed window.
//!
//! The limiter owns the only mutable shared state in the crate: the window
//! counters, guarded by a single mutex. The lock is scoped to the
//! check-and-increment alone; a caller that must wait releases it first, so
//! other callers can reach the window (and be told to wait themselves)
//! while the clock runs down.

use crate::application::ports::Clock;
use crate::domain::window::{Admission, FixedWindow};

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Admits at most `max_requests` calls per `interval`, blocking overflow
/// callers until the window rolls over.
///
/// `acquire()` never errors: it either returns immediately or blocks for at
/// most one interval. Safe under concurrent invocation; the window check is
/// atomic under the internal mutex and every woken caller re-checks before
/// proceeding, so no two callers can reset the window against each other.
#[derive(Debug)]
pub struct RateLimiter {
    window: Mutex<FixedWindow>,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Create a new limiter.
    ///
    /// # Arguments
    /// * `max_requests` - Per-window ceiling (validated by the gateway builder)
    /// * `interval` - Window length
    /// * `clock` - Time source; injectable for tests
    pub fn new(max_requests: u32, interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            window: Mutex::new(FixedWindow::new(max_requests, interval)),
            clock,
        }
    }

    /// Obtain an admission permit, blocking until one is available.
    pub fn acquire(&self) {
        loop {
            let wait = {
                let mut window = self
                    .window
                    .lock()
                    .expect("rate limiter mutex poisoned");
                match window.check(self.clock.now()) {
                    Admission::Granted => {
                        tracing::debug!("admission granted");
                        return;
                    }
                    Admission::Wait(d) => d,
                }
            };
            // Lock released; wait out the window and re-check, since another
            // caller may have reset it in the meantime.
            tracing::warn!(wait_ms = wait.as_millis() as u64, "window full, waiting");
            self.clock.sleep(wait);
        }
    }

    /// The configured per-window ceiling.
    pub fn max_requests(&self) -> u32 {
        self.window
            .lock()
            .expect("rate limiter mutex poisoned")
            .max_requests()
    }

    /// The configured window length.
    pub fn interval(&self) -> Duration {
        self.window
            .lock()
            .expect("rate limiter mutex poisoned")
            .interval()
    }
}
