//! Domain layer: submission entities and the admission policy.
//!
//! Everything here is pure. The entities carry the wire-shape invariants
//! through their types; the fixed window decides admission from instants it
//! is handed, without touching a clock.

pub mod document;
pub mod window;
