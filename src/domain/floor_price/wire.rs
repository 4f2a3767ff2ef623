//! Wire types for the historical floor-price endpoint.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single floor-price sample from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPriceSample {
    #[serde(deserialize_with = "serde_util::timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
    /// `null` when the backend has no floor for this sample.
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub floor_price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub floor_price_usd: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// REST response of `GET /nft/{address}/floor-price/historical`.
///
/// The backend lists samples newest-first. A body without `result` (for
/// example an error object) fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPriceHistoryResponse {
    pub result: Vec<FloorPriceSample>,
    #[serde(default)]
    pub cursor: Option<String>,
}
