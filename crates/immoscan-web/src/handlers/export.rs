use axum::Json;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use immoscan_core::{PropertyRecord, export_csv, export_filename};

use crate::error::ApiError;
use crate::models::ExportRequest;

/// `POST /export-excel`: serialize the reviewed records as a CSV download.
/// An empty batch is fine (header-only file); a non-array payload is the
/// one rejected input.
pub async fn export_excel(Json(request): Json<ExportRequest>) -> Result<Response, ApiError> {
    let items = request
        .properties
        .as_array()
        .ok_or_else(|| ApiError::BadRequest("'properties' must be an array".to_string()))?;

    let mut records: Vec<PropertyRecord> = Vec::with_capacity(items.len());
    for item in items {
        let record = serde_json::from_value(item.clone())
            .map_err(|e| ApiError::BadRequest(format!("invalid property record: {}", e)))?;
        records.push(record);
    }

    let csv = export_csv(&records);
    let filename = export_filename(request.filename.as_deref().unwrap_or(""));
    tracing::info!(%filename, rows = records.len(), "CSV export");

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, csv).into_response())
}
