//! reqwest implementation of [`ExtractionBackend`] against the extraction
//! service's HTTP API.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde_json::Value;

use immoscan_core::{PropertyRecord, extract_city, extract_street};

use crate::{ExtractionBackend, UpstreamError};

/// Probes must answer quickly; they gate the UI, not the extraction.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for a remote extraction service.
pub struct HttpExtractor {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpExtractor {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().build()?;
        Ok(HttpExtractor {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    async fn extract_inner(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<Vec<PropertyRecord>, UpstreamError> {
        let part = reqwest::multipart::Part::bytes(data.to_vec())
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .client
            .post(format!("{}/extract-pdf", self.base_url))
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body: Value = resp.json().await?;
        if body["success"].as_bool() != Some(true) {
            let reason = body["message"]
                .as_str()
                .or_else(|| body["detail"].as_str())
                .unwrap_or("no reason given");
            return Err(UpstreamError::Rejected(reason.to_string()));
        }

        let properties = body["properties"]
            .as_array()
            .ok_or_else(|| UpstreamError::Parse("'properties' is not an array".to_string()))?;

        Ok(properties.iter().map(map_record).collect())
    }

    async fn probe_inner(&self) -> bool {
        let result = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;
        matches!(result, Ok(resp) if resp.status().is_success())
    }
}

impl ExtractionBackend for HttpExtractor {
    fn name(&self) -> &str {
        &self.base_url
    }

    fn extract<'a>(
        &'a self,
        filename: &'a str,
        data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PropertyRecord>, UpstreamError>> + Send + 'a>>
    {
        Box::pin(self.extract_inner(filename, data))
    }

    fn probe<'a>(&'a self) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(self.probe_inner())
    }
}

/// Map one upstream property object into a [`PropertyRecord`].
///
/// The service emits the Centris column names on enhanced records and plain
/// lowercase keys on basic ones. Enhanced fields default to empty strings
/// when absent; `city`/`street` are backfilled from the full address when
/// the upstream omits them.
fn map_record(value: &Value) -> PropertyRecord {
    let get = |key: &str| value[key].as_str().unwrap_or("").to_string();
    let present = |key: &str| {
        value[key]
            .as_str()
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    if value.get("Centris #").is_some() {
        let address = get("Adresse complète");
        let city = present("city").unwrap_or_else(|| extract_city(&address));
        let street = present("street").unwrap_or_else(|| extract_street(&address));
        PropertyRecord {
            centris_no: Some(get("Centris #")),
            district: Some(get("Quartier")),
            property_type: Some(get("Type de propriété")),
            current_price: Some(get("Prix actuel")),
            original_price: Some(get("Prix original")),
            owners: Some(get("Propriétaire(s): nom(s) et adresse(s)")),
            representatives: Some(get("Représentant(s): nom(s) et adresse(s)")),
            broker_names: Some(get("Courtier(s): nom(s)")),
            broker_phones: Some(get("Courtier(s): téléphone(s)")),
            broker_emails: Some(get("Courtier(s): courriel(s)")),
            address: Some(address),
            city: Some(city),
            street: Some(street),
            ..Default::default()
        }
    } else {
        let address = get("address");
        let city = present("city").unwrap_or_else(|| extract_city(&address));
        let street = present("street").unwrap_or_else(|| extract_street(&address));
        PropertyRecord {
            price: Some(get("price")),
            kind: Some(get("type")),
            address: Some(address),
            city: Some(city),
            street: Some(street),
            ..Default::default()
        }
    }
}
