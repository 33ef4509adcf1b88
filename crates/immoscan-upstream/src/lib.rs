//! Access to the remote PDF extraction service.
//!
//! The service owns the actual parsing; this crate owns everything around
//! it: the [`ExtractionBackend`] seam, the reqwest client that forwards
//! uploads, the connectivity probe, and the mediation policy that turns
//! any upstream failure into the demo dataset.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use immoscan_core::PropertyRecord;

mod client;
mod mediator;
pub mod mock;

pub use client::HttpExtractor;
pub use mediator::{Extraction, extract_or_demo};

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream rejected the document: {0}")]
    Rejected(String),
    #[error("malformed upstream response: {0}")]
    Parse(String),
}

/// A backend that can turn an uploaded document into property records.
///
/// Object-safe so the web layer can hold `Option<Arc<dyn ExtractionBackend>>`
/// and tests can substitute [`mock::MockExtractor`].
pub trait ExtractionBackend: Send + Sync {
    /// Display name used in logs (e.g. the upstream base URL).
    fn name(&self) -> &str;

    /// Forward a document and return the extracted records.
    fn extract<'a>(
        &'a self,
        filename: &'a str,
        data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PropertyRecord>, UpstreamError>> + Send + 'a>>;

    /// Liveness check. Must never fail: any error maps to `false`.
    fn probe<'a>(&'a self) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;
}
