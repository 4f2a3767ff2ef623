//! Collection domain — metadata for one NFT contract.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Chain, ContractAddress};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Collection metadata as displayed on the metadata card.
///
/// Built wholesale from one API response and replaced on every search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionMetadata {
    pub address: ContractAddress,
    pub chain: Chain,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub contract_type: Option<String>,
    /// Floor price in `floor_price_currency` (ETH on both supported chains).
    pub floor_price: Option<Decimal>,
    pub floor_price_usd: Option<Decimal>,
    pub floor_price_currency: Option<String>,
    pub collection_logo: Option<String>,
    pub collection_banner_image: Option<String>,
    pub project_url: Option<String>,
    /// Passthrough fields the tracker does not interpret.
    pub extra: serde_json::Map<String, serde_json::Value>,
}
