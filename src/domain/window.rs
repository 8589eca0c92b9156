//! Fixed-window admission policy.
//!
//! The window is a pure state machine: callers feed it the current instant
//! and it answers whether the call is admitted or how long the caller must
//! wait for the window to roll over. It holds no clock and does no locking;
//! both are the application layer's concern.

use std::time::{Duration, Instant};

/// Decision made by the admission policy for a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The call is admitted into the current window.
    Granted,
    /// The window is full; the caller must wait out the remaining time
    /// before re-checking.
    Wait(Duration),
}

impl Admission {
    /// Check if this decision admits the caller.
    pub fn is_granted(&self) -> bool {
        matches!(self, Admission::Granted)
    }

    /// The remaining wait, if the window was full.
    pub fn wait_duration(&self) -> Option<Duration> {
        match self {
            Admission::Granted => None,
            Admission::Wait(d) => Some(*d),
        }
    }
}

/// Fixed (non-sliding) window counter.
///
/// Admits up to `max_requests` calls per `interval`, measured from the first
/// call of each window. The counter resets entirely at window boundaries; a
/// caller arriving exactly at expiry starts a new window.
///
/// # Example
/// ```
/// use crpt_gateway::{Admission, FixedWindow};
/// use std::time::{Duration, Instant};
///
/// let mut window = FixedWindow::new(2, Duration::from_secs(60));
/// let now = Instant::now();
///
/// assert!(window.check(now).is_granted());
/// assert!(window.check(now).is_granted());
///
/// // Third call in the same window must wait out the remainder.
/// assert_eq!(window.check(now), Admission::Wait(Duration::from_secs(60)));
///
/// // After the window rolls over, calls are admitted again.
/// assert!(window.check(now + Duration::from_secs(60)).is_granted());
/// ```
#[derive(Debug, Clone)]
pub struct FixedWindow {
    max_requests: u32,
    interval: Duration,
    window_start: Option<Instant>,
    count: u32,
}

impl FixedWindow {
    /// Create a new fixed window.
    ///
    /// # Arguments
    /// * `max_requests` - Maximum calls admitted per window
    /// * `interval` - Length of each window
    pub fn new(max_requests: u32, interval: Duration) -> Self {
        Self {
            max_requests,
            interval,
            window_start: None,
            count: 0,
        }
    }

    /// Register a call at `now` and decide whether it is admitted.
    ///
    /// The remaining wait in `Admission::Wait` is computed exactly from the
    /// window's start instant, so a blocked caller never oversleeps past the
    /// boundary.
    pub fn check(&mut self, now: Instant) -> Admission {
        match self.window_start {
            // Window still open (boundary itself starts a new window).
            Some(start) if now.saturating_duration_since(start) < self.interval => {
                if self.count < self.max_requests {
                    self.count += 1;
                    Admission::Granted
                } else {
                    let elapsed = now.saturating_duration_since(start);
                    Admission::Wait(self.interval - elapsed)
                }
            }
            // First call ever, or the window has expired: reset.
            _ => {
                self.window_start = Some(now);
                self.count = 1;
                Admission::Granted
            }
        }
    }

    /// The configured per-window ceiling.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// The configured window length.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
