use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};

use immoscan_core::ExtractionReport;
use immoscan_upstream::extract_or_demo;

use crate::error::ApiError;
use crate::state::AppState;
use crate::upload;

/// `POST /extract-pdf`: forward the upload to the extraction service, or
/// serve the demo dataset when that's not possible. Only a missing file is
/// an error; upstream trouble never surfaces here.
pub async fn extract_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ExtractionReport>, ApiError> {
    let upload = upload::parse_multipart(multipart).await?;

    let report = extract_or_demo(state.backend.as_deref(), &upload.filename, &upload.data).await;
    tracing::info!(
        filename = %report.filename,
        total = report.total_properties,
        method = ?report.extraction_method,
        "extraction complete"
    );

    Ok(Json(report))
}
