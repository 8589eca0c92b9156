//! Ports (interfaces) for the application layer.
//!
//! Infrastructure adapters implement these ports, keeping the application
//! layer free of system-clock details.

use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Port for obtaining and passing time.
///
/// `sleep` lives on the port rather than on the caller so that the mock
/// implementation can advance virtual time instead of blocking, which keeps
/// window-wait tests deterministic. Infrastructure provides `SystemClock`
/// for production and `MockClock` for tests.
pub trait Clock: Send + Sync + Debug {
    /// Get the current instant.
    fn now(&self) -> Instant;

    /// Wait for the given duration before returning.
    fn sleep(&self, duration: Duration);
}
