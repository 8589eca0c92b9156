//! Submission entities for the goods-introduction flow.
//!
//! Wire field names are declared statically through serde derives: the
//! in-memory names are already the canonical snake_case form, dates render
//! as plain `YYYY-MM-DD` strings, and enum variants render by symbolic name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of document accepted by the registry.
///
/// Closed enumeration; the registry protocol currently defines a single
/// variant for introducing goods into circulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocType {
    /// Goods produced by the participant are introduced into circulation.
    LpIntroduceGoods,
}

/// Identification of the submitting participant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Description {
    pub participant_inn: String,
}

impl Description {
    pub fn new(participant_inn: impl Into<String>) -> Self {
        Self {
            participant_inn: participant_inn.into(),
        }
    }
}

/// Per-item metadata attached to a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: NaiveDate,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub tnved_code: String,
    pub uit_code: String,
    pub uitu_code: String,
}

/// A goods-introduction submission payload.
///
/// `description` is always present and `products` is always present (though
/// it may be empty); both invariants are carried by the types themselves.
/// Construct through [`Document::builder`], which forces every identifier
/// field to be stated explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: DocType,
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub production_type: String,
    pub products: Vec<Product>,
    pub reg_date: NaiveDate,
    pub reg_number: String,
}

impl Document {
    /// Start building a document from its required core.
    pub fn builder(
        description: Description,
        doc_type: DocType,
        products: Vec<Product>,
    ) -> DocumentBuilder {
        DocumentBuilder {
            description,
            doc_type,
            products,
            doc_id: None,
            doc_status: None,
            import_request: false,
            owner_inn: None,
            participant_inn: None,
            producer_inn: None,
            production_date: None,
            production_type: None,
            reg_date: None,
            reg_number: None,
        }
    }
}

/// Builder for [`Document`].
///
/// Identifier fields have no placeholder defaults; `build()` reports which
/// ones are missing rather than inventing values.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    description: Description,
    doc_type: DocType,
    products: Vec<Product>,
    doc_id: Option<String>,
    doc_status: Option<String>,
    import_request: bool,
    owner_inn: Option<String>,
    participant_inn: Option<String>,
    producer_inn: Option<String>,
    production_date: Option<NaiveDate>,
    production_type: Option<String>,
    reg_date: Option<NaiveDate>,
    reg_number: Option<String>,
}

/// Error returned when a [`DocumentBuilder`] is finalized with fields missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "document field not set: {}", self.0)
    }
}

impl std::error::Error for MissingField {}

impl DocumentBuilder {
    pub fn doc_id(mut self, value: impl Into<String>) -> Self {
        self.doc_id = Some(value.into());
        self
    }

    pub fn doc_status(mut self, value: impl Into<String>) -> Self {
        self.doc_status = Some(value.into());
        self
    }

    pub fn import_request(mut self, value: bool) -> Self {
        self.import_request = value;
        self
    }

    pub fn owner_inn(mut self, value: impl Into<String>) -> Self {
        self.owner_inn = Some(value.into());
        self
    }

    pub fn participant_inn(mut self, value: impl Into<String>) -> Self {
        self.participant_inn = Some(value.into());
        self
    }

    pub fn producer_inn(mut self, value: impl Into<String>) -> Self {
        self.producer_inn = Some(value.into());
        self
    }

    pub fn production_date(mut self, value: NaiveDate) -> Self {
        self.production_date = Some(value);
        self
    }

    pub fn production_type(mut self, value: impl Into<String>) -> Self {
        self.production_type = Some(value.into());
        self
    }

    pub fn reg_date(mut self, value: NaiveDate) -> Self {
        self.reg_date = Some(value);
        self
    }

    pub fn reg_number(mut self, value: impl Into<String>) -> Self {
        self.reg_number = Some(value.into());
        self
    }

    /// Finalize the document, failing on the first unset field.
    pub fn build(self) -> Result<Document, MissingField> {
        Ok(Document {
            description: self.description,
            doc_id: self.doc_id.ok_or(MissingField("doc_id"))?,
            doc_status: self.doc_status.ok_or(MissingField("doc_status"))?,
            doc_type: self.doc_type,
            import_request: self.import_request,
            owner_inn: self.owner_inn.ok_or(MissingField("owner_inn"))?,
            participant_inn: self
                .participant_inn
                .ok_or(MissingField("participant_inn"))?,
            producer_inn: self.producer_inn.ok_or(MissingField("producer_inn"))?,
            production_date: self
                .production_date
                .ok_or(MissingField("production_date"))?,
            production_type: self
                .production_type
                .ok_or(MissingField("production_type"))?,
            products: self.products,
            reg_date: self.reg_date.ok_or(MissingField("reg_date"))?,
            reg_number: self.reg_number.ok_or(MissingField("reg_number"))?,
        })
    }
}

/// The transmitted envelope: a document paired with its signature.
///
/// Built once per submission on the return path and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultDocument {
    pub document: Document,
    pub signature: String,
}

impl ResultDocument {
    pub fn new(document: Document, signature: impl Into<String>) -> Self {
        Self {
            document,
            signature: signature.into(),
        }
    }
}
