//! Low-level HTTP client — `MoralisHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the high-level client boundary). Requests are never retried.

use crate::config::ApiKey;
use crate::domain::collection::wire::CollectionMetadataResponse;
use crate::domain::floor_price::wire::FloorPriceHistoryResponse;
use crate::error::{HttpError, TrackerError};
use crate::network::API_KEY_HEADER;
use crate::shared::{Chain, ContractAddress, Interval};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Moralis REST API.
pub struct MoralisHttp {
    base_url: String,
    client: Client,
}

impl MoralisHttp {
    /// Build a client that sends `api_key` and `Accept: application/json` on
    /// every request. `timeout` is ignored on WASM.
    pub fn new(
        base_url: &str,
        api_key: &ApiKey,
        timeout: Option<Duration>,
    ) -> Result<Self, TrackerError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key.expose()).map_err(|_| {
            TrackerError::Config("API key is not a valid header value".to_string())
        })?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().map_err(HttpError::from)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Collections ──────────────────────────────────────────────────────

    pub async fn get_collection_metadata(
        &self,
        address: &ContractAddress,
        chain: Chain,
    ) -> Result<CollectionMetadataResponse, HttpError> {
        let url = format!(
            "{}/nft/{}/metadata?chain={}",
            self.base_url,
            urlencoding::encode(address.as_str()),
            chain.as_str()
        );
        self.get(&url).await
    }

    // ── Floor prices ─────────────────────────────────────────────────────

    pub async fn get_floor_price_history(
        &self,
        address: &ContractAddress,
        chain: Chain,
        interval: Interval,
    ) -> Result<FloorPriceHistoryResponse, HttpError> {
        let url = format!(
            "{}/nft/{}/floor-price/historical?chain={}&interval={}",
            self.base_url,
            urlencoding::encode(address.as_str()),
            chain.as_str(),
            interval.as_str()
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body_text = resp.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(HttpError::Parse);
        }

        match status.as_u16() {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            status_code => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for MoralisHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
        }
    }
}
