//! High-level client — `FloorTrackerClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::config::{ApiKey, TrackerConfig};
use crate::domain::collection::client::Collections;
use crate::domain::floor_price::client::FloorPrices;
use crate::error::TrackerError;
use crate::http::MoralisHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::collection::client::Collections as CollectionsClient;
pub use crate::domain::floor_price::client::FloorPrices as FloorPricesClient;

/// The primary entry point for API access.
///
/// Provides nested sub-client accessors for each domain:
/// `client.collections()`, `client.floor_prices()`.
#[derive(Clone)]
pub struct FloorTrackerClient {
    pub(crate) http: MoralisHttp,
}

impl FloorTrackerClient {
    pub fn builder() -> FloorTrackerClientBuilder {
        FloorTrackerClientBuilder::default()
    }

    pub fn from_config(config: TrackerConfig) -> Result<Self, TrackerError> {
        Self::builder()
            .base_url(&config.base_url)
            .api_key(config.api_key)
            .build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn collections(&self) -> Collections<'_> {
        Collections { client: self }
    }

    pub fn floor_prices(&self) -> FloorPrices<'_> {
        FloorPrices { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FloorTrackerClientBuilder {
    base_url: String,
    api_key: Option<ApiKey>,
    timeout: Option<Duration>,
}

impl Default for FloorTrackerClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

impl FloorTrackerClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Per-request timeout (native only). Unset by default: a hung request
    /// never resolves.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<FloorTrackerClient, TrackerError> {
        let api_key = self
            .api_key
            .ok_or_else(|| TrackerError::Config("API key is required".to_string()))?;
        Ok(FloorTrackerClient {
            http: MoralisHttp::new(&self.base_url, &api_key, self.timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_api_key() {
        let result = FloorTrackerClient::builder().build();
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_api_key_with_control_chars_is_config_error() {
        let result = FloorTrackerClient::builder()
            .api_key(ApiKey::new("bad\nkey"))
            .build();
        match result {
            Err(e @ TrackerError::Config(_)) => {
                assert_eq!(e.kind(), crate::error::FailureKind::Config)
            }
            Err(other) => panic!("expected config error, got {other:?}"),
            Ok(_) => panic!("expected config error"),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = FloorTrackerClient::builder()
            .base_url("http://localhost:8080/api/v2.2/")
            .api_key(ApiKey::new("k"))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v2.2");
    }

    #[test]
    fn test_default_base_url() {
        let client = FloorTrackerClient::from_config(TrackerConfig::new(ApiKey::new("k"))).unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
    }
}
