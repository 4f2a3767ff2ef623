//! Unicode sparkline for terminal output.

const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const GAP: char = ' ';

/// Render `values` as one glyph per value, scaled between min and max.
/// A flat series renders at mid height; missing values render as a blank.
pub fn sparkline(values: &[Option<f64>]) -> String {
    let (min, max) = values
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let span = max - min;
    let top = (GLYPHS.len() - 1) as f64;

    values
        .iter()
        .map(|v| match v {
            None => GAP,
            Some(_) if span <= f64::EPSILON => GLYPHS[GLYPHS.len() / 2],
            Some(v) => GLYPHS[(((v - min) / span) * top).round() as usize],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_scales_to_extremes() {
        assert_eq!(sparkline(&[Some(1.0), Some(2.0), Some(3.0)]), "▁▅█");
    }

    #[test]
    fn test_sparkline_flat_and_empty() {
        assert_eq!(sparkline(&[Some(2.0), Some(2.0)]), "▅▅");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_sparkline_leaves_gaps_blank() {
        assert_eq!(sparkline(&[Some(1.0), None, Some(3.0)]), "▁ █");
        assert_eq!(sparkline(&[None, None]), "  ");
    }
}
