//! Canonical JSON codec for the wire representation.
//!
//! Field naming, date formatting, and enum rendering are all declared
//! statically on the entities themselves (`src/domain/document.rs`); this
//! module only drives serde and wraps its failure mode. Encoding is pure
//! and should never fail for correctly constructed entities.

use crate::domain::document::{Document, ResultDocument};

/// Error returned when a value cannot be represented on the wire.
#[derive(Debug)]
pub struct EncodeError(serde_json::Error);

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to encode submission: {}", self.0)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(e: serde_json::Error) -> Self {
        EncodeError(e)
    }
}

/// Encode a bare document (the payload that gets signed).
pub fn encode_document(document: &Document) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(document)?)
}

/// Encode the transmitted envelope.
pub fn encode_result(result: &ResultDocument) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(result)?)
}

/// Decode an envelope back into entities.
///
/// Exists for callers that need to inspect what was produced (and for the
/// round-trip test surface); the gateway itself only encodes.
pub fn decode_result(encoded: &str) -> Result<ResultDocument, EncodeError> {
    Ok(serde_json::from_str(encoded)?)
}
