//! Collections sub-client — metadata lookups.

use crate::client::FloorTrackerClient;
use crate::domain::collection::CollectionMetadata;
use crate::error::TrackerError;
use crate::shared::{Chain, ContractAddress};

/// Sub-client for collection metadata.
pub struct Collections<'a> {
    pub(crate) client: &'a FloorTrackerClient,
}

impl<'a> Collections<'a> {
    /// Fetch metadata for `address` on `chain`. Not cached.
    pub async fn metadata(
        &self,
        address: &ContractAddress,
        chain: Chain,
    ) -> Result<CollectionMetadata, TrackerError> {
        let resp = self
            .client
            .http
            .get_collection_metadata(address, chain)
            .await?;
        Ok(CollectionMetadata::from((resp, address, chain)))
    }
}
