//! Mock extraction backend for testing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use immoscan_core::PropertyRecord;

use crate::{ExtractionBackend, UpstreamError};

/// A configurable mock response for [`MockExtractor`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a successful extraction.
    Extracted(Vec<PropertyRecord>),
    /// Simulate the service answering `success: false`.
    Rejected(String),
    /// Simulate a 503 from the service.
    Unavailable,
}

/// A hand-rolled mock implementing [`ExtractionBackend`] for tests.
///
/// Supports:
/// - A fixed response (used for every call), **or**
/// - A sequence of responses (one per call, repeating the last if exhausted).
/// - A configurable probe answer.
/// - Call counting via [`call_count()`](MockExtractor::call_count).
pub struct MockExtractor {
    name: &'static str,
    /// If non-empty, each call pops the next response.
    responses: Mutex<Vec<MockResponse>>,
    /// Fallback when the sequence is empty (or single-response mode).
    fallback: MockResponse,
    probe_up: bool,
    call_count: AtomicUsize,
}

impl MockExtractor {
    /// Create a mock that always returns `response` and probes healthy.
    pub fn new(name: &'static str, response: MockResponse) -> Self {
        MockExtractor {
            name,
            responses: Mutex::new(Vec::new()),
            fallback: response,
            probe_up: true,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(name: &'static str, mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        // Reverse so we can pop() from the front cheaply.
        responses.reverse();
        let fallback = responses.first().cloned().unwrap();
        MockExtractor {
            name,
            responses: Mutex::new(responses),
            fallback,
            probe_up: true,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Set the probe answer.
    pub fn with_probe(mut self, up: bool) -> Self {
        self.probe_up = up;
        self
    }

    /// How many times `extract()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> MockResponse {
        let mut seq = self.responses.lock().unwrap();
        seq.pop().unwrap_or_else(|| self.fallback.clone())
    }
}

impl ExtractionBackend for MockExtractor {
    fn name(&self) -> &str {
        self.name
    }

    fn extract<'a>(
        &'a self,
        _filename: &'a str,
        _data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PropertyRecord>, UpstreamError>> + Send + 'a>>
    {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let response = self.next_response();

        Box::pin(async move {
            match response {
                MockResponse::Extracted(records) => Ok(records),
                MockResponse::Rejected(reason) => Err(UpstreamError::Rejected(reason)),
                MockResponse::Unavailable => {
                    Err(UpstreamError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
                }
            }
        })
    }

    fn probe<'a>(&'a self) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(std::future::ready(self.probe_up))
    }
}
