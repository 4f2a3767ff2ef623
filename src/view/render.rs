//! Plain-text rendering of a [`View`] for terminal front ends.

use super::{ChartPanel, MetadataPanel, View};
use crate::chart::config::{CHART_TITLE, X_AXIS_TITLE, Y_AXIS_TITLE};
use crate::chart::sparkline::sparkline;
use crate::shared::fmt;
use std::fmt::Write;

/// Render the panels that have data; an idle view renders as `""`.
pub fn render(view: &View) -> String {
    let mut out = String::new();
    if let Some(metadata) = &view.metadata {
        write_metadata(&mut out, metadata);
    }
    if let Some(chart) = &view.chart {
        if !out.is_empty() {
            out.push('\n');
        }
        write_chart(&mut out, chart);
    }
    out
}

/// Render only the metadata card, for front ends that redraw per panel.
pub fn render_metadata(panel: &MetadataPanel) -> String {
    let mut out = String::new();
    write_metadata(&mut out, panel);
    out
}

/// Render only the chart panel.
pub fn render_chart(panel: &ChartPanel) -> String {
    let mut out = String::new();
    write_chart(&mut out, panel);
    out
}

fn write_metadata(out: &mut String, panel: &MetadataPanel) {
    let or_blank = |v: &Option<String>| v.clone().unwrap_or_default();
    let _ = writeln!(out, "{}", panel.heading);
    let _ = writeln!(out, "  Name: {}", or_blank(&panel.name));
    let _ = writeln!(out, "  Symbol: {}", or_blank(&panel.symbol));
    let _ = writeln!(
        out,
        "  Floor Price: {}",
        panel.floor_price.as_deref().unwrap_or("n/a")
    );
    if let Some(logo) = &panel.logo_url {
        let _ = writeln!(out, "  Logo: {}", logo);
    }
    if let Some(url) = &panel.project_url {
        let _ = writeln!(out, "  {}: {}", panel.project_link_text, url);
    }
}

fn write_chart(out: &mut String, panel: &ChartPanel) {
    let series = &panel.series;
    let _ = writeln!(out, "{}", panel.heading);
    let _ = writeln!(out, "  {}", CHART_TITLE);
    if series.is_empty() {
        let _ = writeln!(out, "  (no data points)");
        return;
    }
    let _ = writeln!(out, "  {}", sparkline(&series.values));
    if let (Some(min), Some(max), Some(latest)) = (series.min(), series.max(), series.latest()) {
        let _ = writeln!(
            out,
            "  {}: min {} | max {} | latest {}",
            Y_AXIS_TITLE,
            fmt::display(min),
            fmt::display(max),
            fmt::display(latest)
        );
    }
    let width = series.labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let _ = writeln!(out, "  {:<width$}  {}", X_AXIS_TITLE, Y_AXIS_TITLE, width = width);
    for (label, value) in series.labels.iter().zip(&series.values) {
        let value = value.map(fmt::display).unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(out, "  {:<width$}  {}", label, value, width = width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartConfig, ChartSeries};
    use crate::view::{FormView, SearchInput, CHART_HEADING, METADATA_HEADING, PROJECT_LINK_TEXT};

    fn view(metadata: Option<MetadataPanel>, chart: Option<ChartPanel>) -> View {
        View {
            form: FormView::from(&SearchInput::default()),
            metadata,
            chart,
        }
    }

    fn chart_panel(values: Vec<Option<f64>>) -> ChartPanel {
        let series = ChartSeries {
            labels: (1..=values.len())
                .map(|d| format!("3/{}/2024, 12:00:00 AM", d))
                .collect(),
            values,
        };
        ChartPanel {
            heading: CHART_HEADING,
            config: ChartConfig::from(series.clone()),
            series,
        }
    }

    #[test]
    fn test_idle_view_renders_nothing() {
        assert_eq!(render(&view(None, None)), "");
    }

    #[test]
    fn test_metadata_card() {
        let panel = MetadataPanel {
            heading: METADATA_HEADING,
            name: Some("Pudgy Penguins".into()),
            symbol: Some("PPG".into()),
            floor_price: Some("10.8 ETH".into()),
            logo_url: None,
            project_url: Some("https://pudgypenguins.com".into()),
            project_link_text: PROJECT_LINK_TEXT,
        };
        let text = render(&view(Some(panel), None));
        assert!(text.starts_with("Collection Metadata\n"));
        assert!(text.contains("  Floor Price: 10.8 ETH\n"));
        assert!(text.contains("  Project Website: https://pudgypenguins.com\n"));
        assert!(!text.contains("Logo"));
    }

    #[test]
    fn test_chart_rows_in_order() {
        let text = render(&view(None, Some(chart_panel(vec![Some(1.0), Some(1.2)]))));
        assert!(text.contains("▁█"));
        assert!(text.contains("Price (ETH): min 1 | max 1.2 | latest 1.2"));
        let first = text.find("3/1/2024").unwrap();
        let second = text.find("3/2/2024").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_gap_renders_as_blank_and_na() {
        let panel = chart_panel(vec![Some(1.0), None, Some(1.2)]);
        let text = render_chart(&panel);
        assert!(text.contains("▁ █"));
        assert!(text.contains("3/2/2024, 12:00:00 AM  n/a\n"));
        assert!(text.contains("min 1 | max 1.2 | latest 1.2"));
    }

    #[test]
    fn test_panels_render_separately() {
        let panel = chart_panel(vec![Some(1.0)]);
        let whole = render(&view(None, Some(panel.clone())));
        assert_eq!(render_chart(&panel), whole);
    }

    #[test]
    fn test_empty_series() {
        let text = render(&view(None, Some(chart_panel(vec![]))));
        assert!(text.contains("(no data points)"));
    }
}
