use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use immoscan_upstream::{ExtractionBackend, HttpExtractor};
use immoscan_web::config::ServerConfig;
use immoscan_web::router;
use immoscan_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("immoscan_web=info,immoscan_upstream=info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let backend: Option<Arc<dyn ExtractionBackend>> = match &config.extractor_url {
        Some(url) => {
            let extractor = HttpExtractor::new(url, config.extract_timeout)?;
            tracing::info!(%url, "forwarding extractions to the upstream service");
            Some(Arc::new(extractor))
        }
        None => {
            tracing::warn!("EXTRACTOR_URL not set; /extract-pdf will serve demo data");
            None
        }
    };

    let state = Arc::new(AppState { backend });
    let app = router::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
