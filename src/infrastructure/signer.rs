//! Keyed message authentication over serialized payloads.
//!
//! The algorithm is chosen once, at gateway construction; signing itself is
//! stateless per call and deterministic for a fixed algorithm, key, and
//! payload. Base64 encoding of the MAC happens at the gateway boundary, not
//! here.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Supported MAC algorithms.
///
/// Names follow the registry client convention (`"HmacSHA256"`); parsing is
/// lenient about case and an optional hyphen between `Hmac` and the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacAlgorithm {
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmError(pub String);

impl std::fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported MAC algorithm: {}", self.0)
    }
}

impl std::error::Error for AlgorithmError {}

impl MacAlgorithm {
    /// Resolve an algorithm from its conventional name.
    ///
    /// # Example
    /// ```
    /// use crpt_gateway::MacAlgorithm;
    ///
    /// assert_eq!(
    ///     MacAlgorithm::from_name("HmacSHA256").unwrap(),
    ///     MacAlgorithm::HmacSha256
    /// );
    /// assert!(MacAlgorithm::from_name("HmacMD5").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, AlgorithmError> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "hmacsha256" => Ok(MacAlgorithm::HmacSha256),
            "hmacsha384" => Ok(MacAlgorithm::HmacSha384),
            "hmacsha512" => Ok(MacAlgorithm::HmacSha512),
            _ => Err(AlgorithmError(name.to_string())),
        }
    }

    /// The conventional name of this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            MacAlgorithm::HmacSha256 => "HmacSHA256",
            MacAlgorithm::HmacSha384 => "HmacSHA384",
            MacAlgorithm::HmacSha512 => "HmacSHA512",
        }
    }
}

/// Error returned when a single signing call fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    /// Key material was empty; the MAC would authenticate nothing.
    EmptyKey,
}

impl std::fmt::Display for SignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignError::EmptyKey => write!(f, "signing key material is empty"),
        }
    }
}

impl std::error::Error for SignError {}

/// Computes a MAC over a byte payload with caller-supplied key material.
#[derive(Debug, Clone, Copy)]
pub struct HmacSigner {
    algorithm: MacAlgorithm,
}

impl HmacSigner {
    /// Create a signer for the given algorithm.
    pub fn new(algorithm: MacAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The algorithm this signer was constructed with.
    pub fn algorithm(&self) -> MacAlgorithm {
        self.algorithm
    }

    /// Compute the MAC of `payload` under `key_material`.
    ///
    /// Deterministic for a fixed algorithm, key, and payload. Fails only on
    /// invalid key material; a failure affects this one submission, not the
    /// signer.
    pub fn sign(&self, payload: &[u8], key_material: &str) -> Result<Vec<u8>, SignError> {
        if key_material.is_empty() {
            return Err(SignError::EmptyKey);
        }
        // HMAC accepts keys of any non-zero length; emptiness is rejected above.
        let key = key_material.as_bytes();
        let bytes = match self.algorithm {
            MacAlgorithm::HmacSha256 => {
                let mut mac = HmacSha256::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(payload);
                mac.finalize().into_bytes().to_vec()
            }
            MacAlgorithm::HmacSha384 => {
                let mut mac = HmacSha384::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(payload);
                mac.finalize().into_bytes().to_vec()
            }
            MacAlgorithm::HmacSha512 => {
                let mut mac = HmacSha512::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(payload);
                mac.finalize().into_bytes().to_vec()
            }
        };
        Ok(bytes)
    }
}
