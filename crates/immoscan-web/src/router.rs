use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::state::AppState;

/// Upload cap advertised by `/health`; axum answers 413 past it.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::health::health))
        .route("/extract-pdf", post(handlers::extract::extract_pdf))
        .route("/export-excel", post(handlers::export::export_excel))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // The API is consumed cross-origin by the browser front-end.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
