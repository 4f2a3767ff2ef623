//! Floor-price sub-client — historical series queries.

use crate::client::FloorTrackerClient;
use crate::domain::floor_price::FloorPriceHistory;
use crate::error::TrackerError;
use crate::shared::{Chain, ContractAddress, Interval};

/// Sub-client for floor-price history.
pub struct FloorPrices<'a> {
    pub(crate) client: &'a FloorTrackerClient,
}

impl<'a> FloorPrices<'a> {
    /// Fetch the floor-price history over `interval`, oldest point first.
    /// Only the first page is requested.
    pub async fn history(
        &self,
        address: &ContractAddress,
        chain: Chain,
        interval: Interval,
    ) -> Result<FloorPriceHistory, TrackerError> {
        let resp = self
            .client
            .http
            .get_floor_price_history(address, chain, interval)
            .await?;
        Ok(FloorPriceHistory::from((resp, interval)))
    }
}
