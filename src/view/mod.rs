//! Presentation layer — view state, the search shell, and render models.
//!
//! Panels are derived from [`ViewState`] on every call to [`View::from_state`];
//! nothing here is cached.

pub mod render;
pub mod shell;
pub mod source;
pub mod state;

use crate::chart::{ChartConfig, ChartSeries};
use crate::domain::collection::CollectionMetadata;
use crate::domain::floor_price::FloorPriceHistory;
use crate::shared::{Chain, Interval};
use chrono::{Local, TimeZone};
use serde::Serialize;

pub use shell::{Shell, StateChange};
pub use source::CollectionSource;
pub use state::{Phase, SearchInput, SearchTicket, ViewState};

pub const APP_TITLE: &str = "NFT Floor Price Tracker";
pub const METADATA_HEADING: &str = "Collection Metadata";
pub const CHART_HEADING: &str = "Floor Price History";
pub const PROJECT_LINK_TEXT: &str = "Project Website";

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub form: FormView,
    pub metadata: Option<MetadataPanel>,
    pub chart: Option<ChartPanel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub address: String,
    pub chain_options: Vec<SelectOption>,
    pub interval_options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataPanel {
    pub heading: &'static str,
    pub name: Option<String>,
    pub symbol: Option<String>,
    /// e.g. `"10.8 ETH"`.
    pub floor_price: Option<String>,
    pub logo_url: Option<String>,
    pub project_url: Option<String>,
    pub project_link_text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub heading: &'static str,
    pub series: ChartSeries,
    pub config: ChartConfig,
}

impl View {
    /// Derive the view with chart labels in the local time zone.
    pub fn from_state(state: &ViewState) -> Self {
        Self::from_state_in(state, &Local)
    }

    pub fn from_state_in<Tz>(state: &ViewState, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            form: FormView::from(state.input()),
            metadata: state.metadata().map(MetadataPanel::from),
            chart: state.history().map(|h| ChartPanel::from_history_in(h, tz)),
        }
    }
}

impl From<&SearchInput> for FormView {
    fn from(input: &SearchInput) -> Self {
        Self {
            address: input.address.to_string(),
            chain_options: Chain::ALL
                .iter()
                .map(|c| SelectOption {
                    value: c.as_str(),
                    label: c.label(),
                    selected: *c == input.chain,
                })
                .collect(),
            interval_options: Interval::ALL
                .iter()
                .map(|i| SelectOption {
                    value: i.as_str(),
                    label: i.label(),
                    selected: *i == input.interval,
                })
                .collect(),
        }
    }
}

impl From<&CollectionMetadata> for MetadataPanel {
    fn from(m: &CollectionMetadata) -> Self {
        Self {
            heading: METADATA_HEADING,
            name: m.name.clone(),
            symbol: m.symbol.clone(),
            floor_price: m.floor_price.map(|p| format!("{} ETH", p.normalize())),
            logo_url: m.collection_logo.clone(),
            project_url: m.project_url.clone(),
            project_link_text: PROJECT_LINK_TEXT,
        }
    }
}

impl ChartPanel {
    pub fn from_history_in<Tz>(history: &FloorPriceHistory, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let series = ChartSeries::from_points_in(history.points(), tz);
        Self {
            heading: CHART_HEADING,
            config: ChartConfig::from(series.clone()),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::floor_price::FloorPricePoint;
    use crate::shared::ContractAddress;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn metadata() -> CollectionMetadata {
        CollectionMetadata {
            address: ContractAddress::from("0xABC"),
            chain: Chain::Eth,
            name: Some("Pudgy Penguins".into()),
            symbol: Some("PPG".into()),
            contract_type: Some("ERC721".into()),
            floor_price: Some(Decimal::from_str("10.800").unwrap()),
            floor_price_usd: None,
            floor_price_currency: Some("eth".into()),
            collection_logo: Some("https://example.com/logo.png".into()),
            collection_banner_image: None,
            project_url: Some("https://pudgypenguins.com".into()),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_idle_view_has_no_panels() {
        let view = View::from_state_in(&ViewState::new(), &Utc);
        assert!(view.metadata.is_none());
        assert!(view.chart.is_none());
        let selected: Vec<_> = view
            .form
            .interval_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["7d"]);
        assert_eq!(view.form.chain_options.len(), 2);
        assert_eq!(view.form.interval_options.len(), 7);
    }

    #[test]
    fn test_metadata_panel_fields() {
        let panel = MetadataPanel::from(&metadata());
        assert_eq!(panel.heading, "Collection Metadata");
        assert_eq!(panel.floor_price.as_deref(), Some("10.8 ETH"));
        assert_eq!(panel.symbol.as_deref(), Some("PPG"));
        assert_eq!(panel.project_link_text, "Project Website");
    }

    #[test]
    fn test_chart_panel_only_with_history() {
        let (state, ticket) = ViewState::new().begin_search();
        let history = FloorPriceHistory::from_points(
            Interval::Day7,
            vec![FloorPricePoint {
                timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
                floor_price: Some(Decimal::from_str("1.0").unwrap()),
                floor_price_usd: None,
                currency: Some("eth".into()),
            }],
        );
        let state = state.with_history(&ticket, history).unwrap();
        let view = View::from_state_in(&state, &Utc);
        assert!(view.metadata.is_none());
        let chart = view.chart.unwrap();
        assert_eq!(chart.heading, "Floor Price History");
        assert_eq!(chart.series.labels, vec!["3/1/2024, 12:00:00 AM"]);
        assert_eq!(chart.config.values(), &[Some(1.0)]);
    }
}
