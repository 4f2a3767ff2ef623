//! Chart.js line-chart configuration with the tracker's fixed styling.

use super::ChartSeries;
use serde::{Deserialize, Serialize};

pub const CHART_TITLE: &str = "NFT Floor Price over Time";
pub const DATASET_LABEL: &str = "NFT Floor Price (ETH)";
pub const X_AXIS_TITLE: &str = "Time";
pub const Y_AXIS_TITLE: &str = "Price (ETH)";

pub const BORDER_COLOR: &str = "#4CAF50";
pub const BACKGROUND_COLOR: &str = "rgba(76, 175, 80, 0.2)";
pub const POINT_BACKGROUND_COLOR: &str = "#388E3C";
pub const POINT_BORDER_COLOR: &str = "#4CAF50";
pub const AXIS_TITLE_COLOR: &str = "#888";
pub const TENSION: f64 = 0.4;

/// Top-level config object handed to `new Chart(ctx, config)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    pub point_background_color: String,
    pub point_border_color: String,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub position: String,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    fn titled(text: &str) -> Self {
        Self {
            title: Title {
                display: true,
                text: text.to_string(),
                color: Some(AXIS_TITLE_COLOR.to_string()),
                font: Font { size: 16 },
            },
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            plugins: Plugins {
                legend: Legend {
                    position: "top".to_string(),
                    labels: LegendLabels {
                        font: Font { size: 14 },
                    },
                },
                title: Title {
                    display: true,
                    text: CHART_TITLE.to_string(),
                    color: None,
                    font: Font { size: 20 },
                },
            },
            scales: Scales {
                x: Axis::titled(X_AXIS_TITLE),
                y: Axis::titled(Y_AXIS_TITLE),
            },
        }
    }
}

impl From<ChartSeries> for ChartConfig {
    fn from(series: ChartSeries) -> Self {
        Self {
            kind: "line".to_string(),
            data: ChartData {
                labels: series.labels,
                datasets: vec![Dataset {
                    label: DATASET_LABEL.to_string(),
                    data: series.values,
                    border_color: BORDER_COLOR.to_string(),
                    background_color: BACKGROUND_COLOR.to_string(),
                    point_background_color: POINT_BACKGROUND_COLOR.to_string(),
                    point_border_color: POINT_BORDER_COLOR.to_string(),
                    fill: true,
                    tension: TENSION,
                }],
            },
            options: ChartOptions::default(),
        }
    }
}

impl ChartConfig {
    /// The single dataset's values.
    pub fn values(&self) -> &[Option<f64>] {
        self.data
            .datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series() -> ChartSeries {
        ChartSeries {
            labels: vec!["3/1/2024, 12:00:00 AM".into(), "3/3/2024, 12:00:00 AM".into()],
            values: vec![Some(1.0), Some(1.2)],
        }
    }

    #[test]
    fn test_dataset_styling() {
        let config = ChartConfig::from(series());
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "line");
        let dataset = &value["data"]["datasets"][0];
        assert_eq!(dataset["label"], DATASET_LABEL);
        assert_eq!(dataset["borderColor"], "#4CAF50");
        assert_eq!(dataset["backgroundColor"], "rgba(76, 175, 80, 0.2)");
        assert_eq!(dataset["pointBackgroundColor"], "#388E3C");
        assert_eq!(dataset["fill"], true);
        assert_eq!(dataset["tension"], 0.4);
        assert_eq!(dataset["data"], json!([1.0, 1.2]));
        assert_eq!(value["data"]["labels"][1], "3/3/2024, 12:00:00 AM");
    }

    #[test]
    fn test_axis_titles_and_options() {
        let value = serde_json::to_value(ChartConfig::from(series())).unwrap();
        let options = &value["options"];
        assert_eq!(options["responsive"], true);
        assert_eq!(options["plugins"]["legend"]["position"], "top");
        assert_eq!(options["plugins"]["title"]["text"], CHART_TITLE);
        assert!(options["plugins"]["title"].get("color").is_none());
        assert_eq!(options["scales"]["x"]["title"]["text"], "Time");
        assert_eq!(options["scales"]["y"]["title"]["text"], "Price (ETH)");
        assert_eq!(options["scales"]["y"]["title"]["color"], "#888");
        assert_eq!(options["scales"]["y"]["title"]["font"]["size"], 16);
    }

    #[test]
    fn test_missing_value_serializes_as_null() {
        let series = ChartSeries {
            labels: vec!["a".into(), "b".into(), "c".into()],
            values: vec![Some(1.0), None, Some(1.2)],
        };
        let config = ChartConfig::from(series);
        assert_eq!(config.values(), &[Some(1.0), None, Some(1.2)]);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["data"]["datasets"][0]["data"], json!([1.0, null, 1.2]));
    }
}
