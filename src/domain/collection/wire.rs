//! Wire types for the collection metadata endpoint.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response of `GET /nft/{address}/metadata`.
///
/// Every field the tracker displays is named; the rest are kept verbatim in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionMetadataResponse {
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub floor_price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub floor_price_usd: Option<Decimal>,
    #[serde(default)]
    pub floor_price_currency: Option<String>,
    #[serde(default)]
    pub collection_logo: Option<String>,
    #[serde(default)]
    pub collection_banner_image: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
