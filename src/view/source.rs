//! The seam between the shell and whatever answers its two lookups.

use crate::domain::collection::CollectionMetadata;
use crate::domain::floor_price::FloorPriceHistory;
use crate::error::TrackerError;
use crate::shared::{Chain, ContractAddress, Interval};
use async_trait::async_trait;

/// Data source for one search: collection metadata plus floor-price history.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CollectionSource {
    async fn fetch_metadata(
        &self,
        address: &ContractAddress,
        chain: Chain,
    ) -> Result<CollectionMetadata, TrackerError>;

    async fn fetch_history(
        &self,
        address: &ContractAddress,
        chain: Chain,
        interval: Interval,
    ) -> Result<FloorPriceHistory, TrackerError>;
}

#[cfg(feature = "http")]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CollectionSource for crate::client::FloorTrackerClient {
    async fn fetch_metadata(
        &self,
        address: &ContractAddress,
        chain: Chain,
    ) -> Result<CollectionMetadata, TrackerError> {
        self.collections().metadata(address, chain).await
    }

    async fn fetch_history(
        &self,
        address: &ContractAddress,
        chain: Chain,
        interval: Interval,
    ) -> Result<FloorPriceHistory, TrackerError> {
        self.floor_prices().history(address, chain, interval).await
    }
}
