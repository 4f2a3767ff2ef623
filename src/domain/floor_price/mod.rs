//! Floor-price domain — historical floor-price series for one collection.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::Interval;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single point on the floor-price chart. A missing `floor_price` is kept
/// as a gap rather than dropped, so the time axis stays intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPricePoint {
    pub timestamp: DateTime<Utc>,
    pub floor_price: Option<Decimal>,
    pub floor_price_usd: Option<Decimal>,
    /// Quote currency as reported by the backend, e.g. `eth`.
    pub currency: Option<String>,
}

/// Floor-price history in chronological (ascending) order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorPriceHistory {
    pub interval: Interval,
    points: Vec<FloorPricePoint>,
}

impl FloorPriceHistory {
    /// Build a history from points in any order. Equal timestamps keep their
    /// relative input order.
    pub fn from_points(interval: Interval, mut points: Vec<FloorPricePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { interval, points }
    }

    pub fn points(&self) -> &[FloorPricePoint] {
        &self.points
    }

    pub fn latest(&self) -> Option<&FloorPricePoint> {
        self.points.last()
    }

    /// Most recent point that carries a price.
    pub fn latest_priced(&self) -> Option<&FloorPricePoint> {
        self.points.iter().rev().find(|p| p.floor_price.is_some())
    }

    /// Currency of the series, taken from the first point that reports one.
    pub fn currency(&self) -> Option<&str> {
        self.points.iter().find_map(|p| p.currency.as_deref())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
