//! Application layer: ports and orchestration.

pub mod gateway;
pub mod limiter;
pub mod ports;
