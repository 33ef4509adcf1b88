use serde::{Deserialize, Serialize};

pub mod address;
pub mod demo;
pub mod export;

// Re-export for convenience
pub use address::{extract_city, extract_street};
pub use demo::{DEMO_MESSAGE, demo_properties};
pub use export::{export_csv, export_filename};

/// A single property as shown to the reviewer and written to exports.
///
/// Two shapes travel through the same struct: the basic shape
/// (`address`/`price`/`type` plus the optional `city`/`street` display
/// fields) and the enhanced shape carrying the full Centris metadata. A
/// record is enhanced iff it has a non-empty Centris number; that decision
/// is made once, at the boundary, via [`is_enhanced`](Self::is_enhanced).
///
/// All values are free-form, locale-formatted text (prices keep their
/// embedded `$` and spacing). Nothing downstream parses them as numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Centris listing number. Presence marks the record as enhanced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centris_no: Option<String>,
    /// Basic address, or the full address on enhanced records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representatives: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker_names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker_phones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker_emails: Option<String>,
}

impl PropertyRecord {
    /// Build a basic-shape record.
    pub fn basic(address: &str, price: &str, kind: &str, city: &str, street: &str) -> Self {
        PropertyRecord {
            address: Some(address.to_string()),
            price: Some(price.to_string()),
            kind: Some(kind.to_string()),
            city: Some(city.to_string()),
            street: Some(street.to_string()),
            ..Default::default()
        }
    }

    /// Whether this record carries the enhanced Centris metadata.
    pub fn is_enhanced(&self) -> bool {
        self.centris_no.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Provenance of an extraction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Records came from the remote extraction service.
    PythonBackend,
    /// Records are the fixed demonstration dataset.
    DemoData,
}

/// The response body of an extraction request.
///
/// `success` is always true: upstream failures are absorbed into the demo
/// fallback before a report is built, and client errors are rejected before
/// any report exists. `extraction_method` tells the caller which world the
/// records came from without changing the response shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub success: bool,
    pub filename: String,
    pub total_properties: usize,
    pub properties: Vec<PropertyRecord>,
    pub message: String,
    pub extraction_method: ExtractionMethod,
}

impl ExtractionReport {
    /// Build a report. `total_properties` is derived from `properties`,
    /// never supplied by the caller.
    pub fn new(
        filename: impl Into<String>,
        properties: Vec<PropertyRecord>,
        message: impl Into<String>,
        extraction_method: ExtractionMethod,
    ) -> Self {
        ExtractionReport {
            success: true,
            filename: filename.into(),
            total_properties: properties.len(),
            properties,
            message: message.into(),
            extraction_method,
        }
    }
}
