//! The extraction mediation policy: one upstream attempt, then the demo
//! dataset. Callers always get a well-formed report.

use immoscan_core::{
    DEMO_MESSAGE, ExtractionMethod, ExtractionReport, PropertyRecord, demo_properties,
};

use crate::ExtractionBackend;

/// Where a batch of records came from.
#[derive(Debug, Clone)]
pub enum Extraction {
    /// Records extracted by the remote service.
    Live(Vec<PropertyRecord>),
    /// The fixed demonstration dataset.
    Demo(Vec<PropertyRecord>),
}

/// Run one extraction attempt and shape the result into a report.
///
/// Never fails: a missing backend, a transport error, a non-success status,
/// or an upstream rejection all degrade to [`Extraction::Demo`]. The real
/// failure is logged so operators still see outages the caller is shielded
/// from. No retries, no partial results.
pub async fn extract_or_demo(
    backend: Option<&dyn ExtractionBackend>,
    filename: &str,
    data: &[u8],
) -> ExtractionReport {
    let outcome = match backend {
        None => {
            tracing::info!("no extraction backend configured, serving demo data");
            Extraction::Demo(demo_properties())
        }
        Some(backend) => match backend.extract(filename, data).await {
            Ok(records) => Extraction::Live(records),
            Err(error) => {
                tracing::warn!(
                    backend = backend.name(),
                    error = %error,
                    "extraction failed, falling back to demo data"
                );
                Extraction::Demo(demo_properties())
            }
        },
    };

    match outcome {
        Extraction::Live(records) => {
            let message = format!("Successfully extracted {} properties", records.len());
            ExtractionReport::new(filename, records, message, ExtractionMethod::PythonBackend)
        }
        Extraction::Demo(records) => {
            ExtractionReport::new(filename, records, DEMO_MESSAGE, ExtractionMethod::DemoData)
        }
    }
}
