//! Submission flow, wire shape, and error taxonomy.

mod common;

use crpt_gateway::{
    decode_result, BuildError, Gateway, MockClock, SubmitError,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

use common::sample_document;

fn gateway() -> Gateway {
    Gateway::builder()
        .with_interval(Duration::from_secs(5))
        .with_max_requests(100)
        .with_clock(Arc::new(MockClock::new(Instant::now())))
        .build()
        .unwrap()
}

fn signing_gateway() -> Gateway {
    Gateway::builder()
        .with_interval(Duration::from_secs(5))
        .with_max_requests(100)
        .with_signing_algorithm("HmacSHA256")
        .with_clock(Arc::new(MockClock::new(Instant::now())))
        .build()
        .unwrap()
}

#[test]
fn presigned_envelope_matches_the_registry_shape() {
    let encoded = gateway()
        .submit_presigned(&sample_document(), "sig123")
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(value["signature"], "sig123");

    let doc = &value["document"];
    assert_eq!(doc["description"]["participant_inn"], "7731347089");
    assert_eq!(doc["doc_id"], "b54bb63e-1d2f-4b2f-b8a1-1c0b3f9f9f01");
    assert_eq!(doc["doc_status"], "IN_PROGRESS");
    assert_eq!(doc["doc_type"], "LP_INTRODUCE_GOODS");
    assert_eq!(doc["import_request"], false);
    assert_eq!(doc["owner_inn"], "7731347089");
    assert_eq!(doc["participant_inn"], "7731347089");
    assert_eq!(doc["producer_inn"], "7731347089");
    assert_eq!(doc["production_date"], "2024-01-15");
    assert_eq!(doc["production_type"], "OWN_PRODUCTION");
    assert_eq!(doc["reg_date"], "2024-01-16");
    assert_eq!(doc["reg_number"], "RU-2024-000001");

    let product = &doc["products"][0];
    assert_eq!(product["certificate_document"], "CONFORMITY_CERTIFICATE");
    assert_eq!(product["certificate_document_date"], "2023-11-20");
    assert_eq!(product["certificate_document_number"], "CERT-0042");
    assert_eq!(product["production_date"], "2024-01-10");
    assert_eq!(product["tnved_code"], "6403999800");
    assert_eq!(product["uit_code"], "010463003407001221SgEKSPirk(93)");
    assert_eq!(product["uitu_code"], "0104630034070012");
}

#[test]
fn envelope_round_trips_exactly() {
    let document = sample_document();
    let encoded = gateway().submit_presigned(&document, "sig123").unwrap();

    let decoded = decode_result(&encoded).unwrap();
    assert_eq!(decoded.document, document);
    assert_eq!(decoded.signature, "sig123");
}

#[test]
fn signed_round_trip_preserves_document_fields() {
    let document = sample_document();
    let encoded = signing_gateway()
        .submit_signed(&document, "KptsjBR7OuJ8BFYtNO4xNQPPdZZC94wz")
        .unwrap();

    let decoded = decode_result(&encoded).unwrap();
    assert_eq!(decoded.document, document);
    // Base64 of a SHA-256 MAC: 32 bytes -> 44 chars with padding.
    assert_eq!(decoded.signature.len(), 44);
}

#[test]
fn signing_is_deterministic_and_key_sensitive() {
    let gateway = signing_gateway();
    let document = sample_document();

    let a = gateway.submit_signed(&document, "key-material").unwrap();
    let b = gateway.submit_signed(&document, "key-material").unwrap();
    assert_eq!(a, b);

    // Flipping one byte of the key changes the signature.
    let c = gateway.submit_signed(&document, "key-materiam").unwrap();
    let sig_ab = decode_result(&a).unwrap().signature;
    let sig_c = decode_result(&c).unwrap().signature;
    assert_ne!(sig_ab, sig_c);
}

#[test]
fn signing_without_algorithm_is_rejected_before_admission() {
    let clock = Arc::new(MockClock::new(Instant::now()));
    let gateway = Gateway::builder()
        .with_interval(Duration::from_secs(5))
        .with_max_requests(1)
        .with_clock(clock.clone())
        .build()
        .unwrap();

    // Exhaust the window first.
    gateway
        .submit_presigned(&sample_document(), "sig")
        .unwrap();

    // The unsupported call fails without consuming a permit or waiting.
    let err = gateway
        .submit_signed(&sample_document(), "key")
        .unwrap_err();
    assert!(matches!(err, SubmitError::SigningUnavailable));
    assert_eq!(clock.slept(), Duration::ZERO);
}

#[test]
fn construction_rejects_bad_configuration() {
    let err = Gateway::builder()
        .with_interval(Duration::from_secs(1))
        .with_max_requests(0)
        .build()
        .unwrap_err();
    assert_eq!(err, BuildError::ZeroMaxRequests);

    let err = Gateway::builder()
        .with_interval(Duration::ZERO)
        .with_max_requests(1)
        .build()
        .unwrap_err();
    assert_eq!(err, BuildError::ZeroInterval);

    let err = Gateway::builder()
        .with_interval(Duration::from_secs(1))
        .with_max_requests(1)
        .with_signing_algorithm("HmacMD5")
        .build()
        .unwrap_err();
    assert!(matches!(err, BuildError::UnknownAlgorithm(_)));
}

#[test]
fn submission_failure_does_not_poison_the_gateway() {
    let gateway = signing_gateway();
    let document = sample_document();

    assert!(gateway.submit_signed(&document, "").is_err());

    // The gateway keeps working for the next caller.
    assert!(gateway.submit_signed(&document, "key").is_ok());
    assert!(gateway.submit_presigned(&document, "sig").is_ok());
}
