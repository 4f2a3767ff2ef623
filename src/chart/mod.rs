//! Chart adapter — projects a floor-price history into a labeled line series.
//!
//! The series is derived on every render and never stored; styling lives in
//! [`config`], terminal glyphs in [`sparkline`].

pub mod config;
pub mod sparkline;

use crate::domain::floor_price::FloorPricePoint;
use chrono::{DateTime, Local, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

pub use config::ChartConfig;

/// `toLocaleString` layout for `en-US`, e.g. `3/1/2024, 1:05:09 PM`.
pub const LABEL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Labels and values of a single line series, index-aligned. A `None` value
/// serializes as `null`, which Chart.js draws as a gap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ChartSeries {
    /// Project points (already ascending) with labels in the local time zone.
    pub fn from_points(points: &[FloorPricePoint]) -> Self {
        Self::from_points_in(points, &Local)
    }

    /// Project points with labels rendered in `tz`.
    pub fn from_points_in<Tz>(points: &[FloorPricePoint], tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let labels = points.iter().map(|p| format_label(&p.timestamp, tz)).collect();
        let values = points
            .iter()
            .map(|p| p.floor_price.and_then(|d| d.to_f64()))
            .collect();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values that carry a price, in order.
    pub fn priced(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flatten().copied()
    }

    pub fn min(&self) -> Option<f64> {
        self.priced().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.priced().reduce(f64::max)
    }

    /// Last priced value; trailing gaps are skipped.
    pub fn latest(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

pub fn format_label<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format(LABEL_FORMAT).to_string()
}
