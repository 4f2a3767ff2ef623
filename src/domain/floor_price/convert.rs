//! Conversions from wire types to domain types for floor-price history.

use super::wire::{FloorPriceHistoryResponse, FloorPriceSample};
use super::{FloorPriceHistory, FloorPricePoint};
use crate::shared::Interval;

impl From<FloorPriceSample> for FloorPricePoint {
    fn from(s: FloorPriceSample) -> Self {
        Self {
            timestamp: s.timestamp,
            floor_price: s.floor_price,
            floor_price_usd: s.floor_price_usd,
            currency: s.currency,
        }
    }
}

impl From<(FloorPriceHistoryResponse, Interval)> for FloorPriceHistory {
    fn from((resp, interval): (FloorPriceHistoryResponse, Interval)) -> Self {
        // Newest-first from the backend; reverse, then sort in case it was not.
        let points = resp
            .result
            .into_iter()
            .rev()
            .map(FloorPricePoint::from)
            .collect();
        FloorPriceHistory::from_points(interval, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_newest_first_is_reversed() {
        let resp: FloorPriceHistoryResponse = serde_json::from_str(
            r#"{"result": [
                {"timestamp": "2024-03-03T00:00:00.000Z", "floor_price": "1.2"},
                {"timestamp": "2024-03-01T00:00:00.000Z", "floor_price": "1.0"}
            ]}"#,
        )
        .unwrap();
        let history = FloorPriceHistory::from((resp, Interval::Day7));
        let pairs: Vec<_> = history
            .points()
            .iter()
            .map(|p| (p.timestamp, p.floor_price))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(), Some(dec("1.0"))),
                (Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap(), Some(dec("1.2"))),
            ]
        );
        assert_eq!(history.interval, Interval::Day7);
    }

    #[test]
    fn test_unordered_input_comes_out_ascending() {
        let resp: FloorPriceHistoryResponse = serde_json::from_str(
            r#"{"result": [
                {"timestamp": 3000, "floor_price": 3},
                {"timestamp": 1000, "floor_price": 1},
                {"timestamp": 4000, "floor_price": 4},
                {"timestamp": 2000, "floor_price": 2}
            ]}"#,
        )
        .unwrap();
        let history = FloorPriceHistory::from((resp, Interval::All));
        assert!(history
            .points()
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(history.latest().unwrap().floor_price, Some(dec("4")));
    }

    #[test]
    fn test_null_sample_is_kept_as_gap() {
        let resp: FloorPriceHistoryResponse = serde_json::from_str(
            r#"{"result": [
                {"timestamp": "2024-03-03T00:00:00.000Z", "floor_price": "1.2", "currency": "eth"},
                {"timestamp": "2024-03-02T00:00:00.000Z", "floor_price": null, "currency": "eth"},
                {"timestamp": "2024-03-01T00:00:00.000Z", "floor_price": "1.0", "currency": "eth"}
            ]}"#,
        )
        .unwrap();
        let history = FloorPriceHistory::from((resp, Interval::Day7));
        let prices: Vec<_> = history.points().iter().map(|p| p.floor_price).collect();
        assert_eq!(prices, vec![Some(dec("1.0")), None, Some(dec("1.2"))]);
        assert_eq!(history.currency(), Some("eth"));
    }

    #[test]
    fn test_latest_priced_skips_trailing_gap() {
        let resp: FloorPriceHistoryResponse = serde_json::from_str(
            r#"{"result": [
                {"timestamp": 2000},
                {"timestamp": 1000, "floor_price": "0.5"}
            ]}"#,
        )
        .unwrap();
        let history = FloorPriceHistory::from((resp, Interval::Day1));
        assert!(history.latest().unwrap().floor_price.is_none());
        assert_eq!(history.latest_priced().unwrap().floor_price, Some(dec("0.5")));
        assert!(history.currency().is_none());
    }

    #[test]
    fn test_error_payload_fails_to_parse() {
        let err = serde_json::from_str::<FloorPriceHistoryResponse>(
            r#"{"message": "No metadata found"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_result() {
        let resp: FloorPriceHistoryResponse = serde_json::from_str(r#"{"result": []}"#).unwrap();
        let history = FloorPriceHistory::from((resp, Interval::Day1));
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
