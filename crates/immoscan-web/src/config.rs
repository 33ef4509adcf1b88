//! Environment-driven server configuration.

use std::time::Duration;

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_EXTRACT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the extraction service. `None` means demo mode.
    pub extractor_url: Option<String>,
    /// Bound on the upstream extraction call; the always-respond contract
    /// needs one even though the upstream advertises none.
    pub extract_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        ServerConfig {
            port: parse_port(std::env::var("PORT").ok()),
            extractor_url: normalize_url(std::env::var("EXTRACTOR_URL").ok()),
            extract_timeout: parse_timeout(std::env::var("EXTRACTOR_TIMEOUT_SECS").ok()),
        }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn normalize_url(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(value: Option<String>) -> Duration {
    let secs = value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_EXTRACT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
