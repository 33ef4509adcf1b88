use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Export request ──────────────────────────────────────────────────────

/// Body of `POST /export-excel`. `properties` stays a raw JSON value so a
/// non-array payload can be answered with a 400 and a message instead of a
/// deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub properties: Value,
}

// ── Service info ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthInfo {
    pub api: &'static str,
    pub extraction_service: &'static str,
    pub supported_formats: [&'static str; 1],
    pub max_file_size: &'static str,
    /// `"connected"` when the upstream probe succeeds, `"demo"` otherwise.
    pub status: &'static str,
}
