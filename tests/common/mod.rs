//! Shared fixtures for integration tests.
//!
//! Fixture data lives here, outside the core crate: the library itself
//! never invents placeholder values for identifier fields.

use crpt_gateway::{Description, DocType, Document, Product};

pub fn sample_product() -> Product {
    Product {
        certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
        certificate_document_date: "2023-11-20".parse().unwrap(),
        certificate_document_number: "CERT-0042".to_string(),
        owner_inn: "7731347089".to_string(),
        producer_inn: "7731347089".to_string(),
        production_date: "2024-01-10".parse().unwrap(),
        tnved_code: "6403999800".to_string(),
        uit_code: "010463003407001221SgEKSPirk(93)".to_string(),
        uitu_code: "0104630034070012".to_string(),
    }
}

pub fn sample_document() -> Document {
    Document::builder(
        Description::new("7731347089"),
        DocType::LpIntroduceGoods,
        vec![sample_product()],
    )
    .doc_id("b54bb63e-1d2f-4b2f-b8a1-1c0b3f9f9f01")
    .doc_status("IN_PROGRESS")
    .import_request(false)
    .owner_inn("7731347089")
    .participant_inn("7731347089")
    .producer_inn("7731347089")
    .production_date("2024-01-15".parse().unwrap())
    .production_type("OWN_PRODUCTION")
    .reg_date("2024-01-16".parse().unwrap())
    .reg_number("RU-2024-000001")
    .build()
    .unwrap()
}
