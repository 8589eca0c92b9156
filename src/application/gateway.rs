//! Submission gateway: admission, signing, and envelope encoding.
//!
//! The gateway is the crate's public entry point. Each submission acquires
//! an admission permit before any serialization or signing work, then runs
//! entirely outside the limiter's lock, so distinct documents proceed in
//! parallel once admitted. The returned string is the exact request body
//! the transport collaborator sends to the registry; the gateway itself
//! performs no network calls and keeps no submission history.

use crate::application::limiter::RateLimiter;
use crate::application::ports::Clock;
use crate::domain::document::{Document, ResultDocument};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::codec::{self, EncodeError};
use crate::infrastructure::signer::{AlgorithmError, HmacSigner, MacAlgorithm, SignError};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use std::sync::Arc;
use std::time::Duration;

/// Error returned when building a [`Gateway`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `interval` must be a positive duration
    ZeroInterval,
    /// `max_requests` must be greater than 0
    ZeroMaxRequests,
    /// The requested signing algorithm is not supported
    UnknownAlgorithm(AlgorithmError),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::ZeroInterval => {
                write!(f, "interval must be greater than zero")
            }
            BuildError::ZeroMaxRequests => {
                write!(f, "max_requests must be greater than 0")
            }
            BuildError::UnknownAlgorithm(e) => {
                write!(f, "signing algorithm error: {}", e)
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl From<AlgorithmError> for BuildError {
    fn from(e: AlgorithmError) -> Self {
        BuildError::UnknownAlgorithm(e)
    }
}

/// Error returned for a single failed submission.
///
/// Submission errors never poison the gateway; the next call starts clean.
#[derive(Debug)]
pub enum SubmitError {
    /// `submit_signed` was called on a gateway built without a signing
    /// algorithm
    SigningUnavailable,
    /// The MAC computation rejected its inputs
    Signing(SignError),
    /// The document graph could not be encoded
    Encoding(EncodeError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::SigningUnavailable => {
                write!(f, "gateway was built without a signing algorithm")
            }
            SubmitError::Signing(e) => write!(f, "signing failed: {}", e),
            SubmitError::Encoding(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::SigningUnavailable => None,
            SubmitError::Signing(e) => Some(e),
            SubmitError::Encoding(e) => Some(e),
        }
    }
}

impl From<SignError> for SubmitError {
    fn from(e: SignError) -> Self {
        SubmitError::Signing(e)
    }
}

impl From<EncodeError> for SubmitError {
    fn from(e: EncodeError) -> Self {
        SubmitError::Encoding(e)
    }
}

/// Builder for constructing a [`Gateway`].
///
/// `interval` and `max_requests` are required; both are validated when
/// `build()` is called. A signing algorithm is optional: without one the
/// gateway only offers presigned submission.
#[derive(Debug)]
pub struct GatewayBuilder {
    interval: Option<Duration>,
    max_requests: Option<u32>,
    algorithm: Option<String>,
    clock: Option<Arc<dyn Clock>>,
}

impl GatewayBuilder {
    /// Set the rate-limit window length. Required.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the per-window submission ceiling. Required.
    pub fn with_max_requests(mut self, max_requests: u32) -> Self {
        self.max_requests = Some(max_requests);
        self
    }

    /// Enable sign-and-submit mode with the named MAC algorithm
    /// (e.g. `"HmacSHA256"`).
    ///
    /// The name is resolved when `build()` is called; unknown names fail
    /// construction.
    pub fn with_signing_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Set a custom clock (mainly for testing).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validate the configuration and construct the gateway.
    pub fn build(self) -> Result<Gateway, BuildError> {
        let interval = self.interval.ok_or(BuildError::ZeroInterval)?;
        if interval.is_zero() {
            return Err(BuildError::ZeroInterval);
        }
        let max_requests = self.max_requests.ok_or(BuildError::ZeroMaxRequests)?;
        if max_requests == 0 {
            return Err(BuildError::ZeroMaxRequests);
        }

        let signer = match self.algorithm {
            Some(name) => Some(HmacSigner::new(MacAlgorithm::from_name(&name)?)),
            None => None,
        };
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::new()));

        Ok(Gateway {
            limiter: RateLimiter::new(max_requests, interval, clock),
            signer,
        })
    }
}

/// Client-side submission gateway for the goods-introduction registry.
///
/// Bounds submissions to `max_requests` per `interval`, optionally signs
/// outgoing payloads, and emits the canonical encoded envelope.
///
/// # Example
/// ```
/// use crpt_gateway::Gateway;
/// use std::time::Duration;
///
/// let gateway = Gateway::builder()
///     .with_interval(Duration::from_secs(5))
///     .with_max_requests(2)
///     .with_signing_algorithm("HmacSHA256")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct Gateway {
    limiter: RateLimiter,
    signer: Option<HmacSigner>,
}

impl Gateway {
    /// Start building a gateway.
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder {
            interval: None,
            max_requests: None,
            algorithm: None,
            clock: None,
        }
    }

    /// Sign-and-submit: serialize the document, MAC it under `key_material`,
    /// and return the encoded envelope.
    ///
    /// Blocks in the rate limiter for at most one interval if the current
    /// window is full. Fails with [`SubmitError::SigningUnavailable`] when
    /// the gateway was built without a signing algorithm.
    pub fn submit_signed(
        &self,
        document: &Document,
        key_material: &str,
    ) -> Result<String, SubmitError> {
        let signer = self.signer.ok_or(SubmitError::SigningUnavailable)?;

        self.limiter.acquire();

        let payload = codec::encode_document(document)?;
        let mac = signer.sign(payload.as_bytes(), key_material)?;
        let signature = BASE64.encode(mac);

        tracing::debug!(
            doc_id = %document.doc_id,
            algorithm = signer.algorithm().name(),
            "document signed"
        );
        self.finish(document, signature)
    }

    /// Presigned-submit: attach an already-computed signature and return
    /// the encoded envelope.
    ///
    /// Blocks in the rate limiter for at most one interval if the current
    /// window is full.
    pub fn submit_presigned(
        &self,
        document: &Document,
        signature: &str,
    ) -> Result<String, SubmitError> {
        self.limiter.acquire();
        self.finish(document, signature.to_string())
    }

    fn finish(&self, document: &Document, signature: String) -> Result<String, SubmitError> {
        let envelope = ResultDocument::new(document.clone(), signature);
        let encoded = codec::encode_result(&envelope)?;
        tracing::debug!(doc_id = %document.doc_id, bytes = encoded.len(), "submission encoded");
        Ok(encoded)
    }

    /// The configured per-window ceiling.
    pub fn max_requests(&self) -> u32 {
        self.limiter.max_requests()
    }

    /// The configured window length.
    pub fn interval(&self) -> Duration {
        self.limiter.interval()
    }

    /// Whether sign-and-submit mode is available.
    pub fn can_sign(&self) -> bool {
        self.signer.is_some()
    }
}
