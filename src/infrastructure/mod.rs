//! Infrastructure layer: adapters behind the application's ports.

pub mod clock;
pub mod codec;
pub mod signer;

pub mod mocks;
