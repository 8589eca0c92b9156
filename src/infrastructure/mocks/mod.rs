//! Test doubles for infrastructure adapters.

mod clock;

pub use clock::MockClock;
