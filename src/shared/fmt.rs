//! Number formatting for human-readable display.
//!
//! Handles f64 values with automatic decimal-place detection and comma separators.

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.as_str()),
    };
    let mut parts = unsigned.splitn(2, '.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn get_decimal_places(value: f64) -> usize {
    let abs_value = value.abs();

    if abs_value >= 100.0 {
        return 2;
    }

    if abs_value >= 1.0 || abs_value == 0.0 {
        return 4;
    }

    let exponent = abs_value.log10().floor().abs() as usize;
    (exponent + 3).min(8)
}

/// Format a floor price for display with auto-detected decimal places.
pub fn display(amount: f64) -> String {
    display_with_decimals(amount, get_decimal_places(amount))
}

/// Format an f64 for display with explicit decimal places.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    display_formatted_string(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatted_string_groups_thousands() {
        assert_eq!(display_formatted_string("1234567.50".to_string()), "1,234,567.5");
        assert_eq!(display_formatted_string("-1234.000".to_string()), "-1,234");
        assert_eq!(display_formatted_string("999".to_string()), "999");
    }

    #[test]
    fn test_display_floor_prices() {
        assert_eq!(display(1.2), "1.2");
        assert_eq!(display(14.56789), "14.5679");
        assert_eq!(display(1250.0), "1,250");
        assert_eq!(display(0.0), "0");
        assert_eq!(display(0.001234), "0.001234");
    }
}
