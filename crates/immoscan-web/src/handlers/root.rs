use axum::Json;

use crate::models::ServiceInfo;

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "immoscan API is running",
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
