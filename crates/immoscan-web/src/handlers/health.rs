use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::models::HealthInfo;
use crate::state::AppState;

/// Liveness for the front-end: the `status` field tells it, before any
/// upload, whether to expect real or demo results.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthInfo> {
    let connected = match &state.backend {
        Some(backend) => backend.probe().await,
        None => false,
    };

    Json(HealthInfo {
        api: "healthy",
        extraction_service: "ready",
        supported_formats: ["PDF"],
        max_file_size: "10MB",
        status: if connected { "connected" } else { "demo" },
    })
}
