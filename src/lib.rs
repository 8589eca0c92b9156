//! # crpt-gateway
//!
//! Client-side submission gateway for the CRPT goods-introduction registry.
//!
//! The crate accepts a structured goods-introduction [`Document`], enforces
//! a strict ceiling on how many documents may be submitted per fixed time
//! window, optionally computes an HMAC signature over the outgoing payload,
//! and emits the canonical JSON envelope the registry expects. Network
//! transport, configuration bootstrap, and worker harnesses are the
//! caller's concern; the gateway produces the request body and nothing
//! else.
//!
//! ## Quick Start
//!
//! ```rust
//! use crpt_gateway::{Description, DocType, Document, Gateway};
//! use std::time::Duration;
//!
//! let gateway = Gateway::builder()
//!     .with_interval(Duration::from_secs(5))
//!     .with_max_requests(2)
//!     .with_signing_algorithm("HmacSHA256")
//!     .build()
//!     .unwrap();
//!
//! let document = Document::builder(
//!     Description::new("7731347089"),
//!     DocType::LpIntroduceGoods,
//!     Vec::new(),
//! )
//! .doc_id("doc-1")
//! .doc_status("DRAFT")
//! .owner_inn("7731347089")
//! .participant_inn("7731347089")
//! .producer_inn("7731347089")
//! .production_date("2024-01-15".parse().unwrap())
//! .production_type("OWN_PRODUCTION")
//! .reg_date("2024-01-16".parse().unwrap())
//! .reg_number("RU-2024-000001")
//! .build()
//! .unwrap();
//!
//! let body = gateway
//!     .submit_signed(&document, "KptsjBR7OuJ8BFYtNO4xNQPPdZZC94wz")
//!     .unwrap();
//! assert!(body.contains("\"signature\""));
//! ```
//!
//! ## Admission Control
//!
//! Submissions are gated by a fixed (non-sliding) window: at most
//! `max_requests` calls are admitted per `interval`, measured from the
//! first call of each window. An overflowing caller blocks for exactly the
//! window's remaining time, never a full extra interval, then re-checks.
//! The window counters are the only shared mutable state and sit behind a
//! single mutex scoped to the check itself; serialization and signing run
//! outside it, so distinct documents proceed in parallel once admitted.
//!
//! ## Submission Modes
//!
//! - [`Gateway::submit_signed`] serializes the document, computes an HMAC
//!   over the bytes with caller-supplied key material, and base64-encodes
//!   the result into the envelope. Requires a signing algorithm at
//!   construction.
//! - [`Gateway::submit_presigned`] attaches an already-computed signature
//!   string. Always available.
//!
//! Both return the encoded [`ResultDocument`] envelope and propagate all
//! failures synchronously; nothing is retried and no partial result is
//! ever produced.
//!
//! ## Testing
//!
//! Time is injected through the [`Clock`] port. [`MockClock`] advances
//! virtual time instead of blocking, so window-wait behavior can be tested
//! deterministically:
//!
//! ```rust
//! use crpt_gateway::{Clock, Gateway, MockClock};
//! use std::sync::Arc;
//! use std::time::{Duration, Instant};
//!
//! let clock = Arc::new(MockClock::new(Instant::now()));
//! let gateway = Gateway::builder()
//!     .with_interval(Duration::from_secs(5))
//!     .with_max_requests(1)
//!     .with_clock(clock.clone())
//!     .build()
//!     .unwrap();
//! ```

// Domain layer - pure business logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    document::{
        Description, DocType, Document, DocumentBuilder, MissingField, Product, ResultDocument,
    },
    window::{Admission, FixedWindow},
};

pub use application::{
    gateway::{BuildError, Gateway, GatewayBuilder, SubmitError},
    limiter::RateLimiter,
    ports::Clock,
};

pub use infrastructure::{
    clock::SystemClock,
    codec::{decode_result, encode_document, encode_result, EncodeError},
    mocks::MockClock,
    signer::{AlgorithmError, HmacSigner, MacAlgorithm, SignError},
};
