use std::sync::Arc;

use immoscan_upstream::ExtractionBackend;

/// Shared application state accessible from all handlers.
///
/// `backend` is `None` when no upstream is configured; extraction then
/// serves demo data and `/health` reports demo mode.
pub struct AppState {
    pub backend: Option<Arc<dyn ExtractionBackend>>,
}
