//! Custom serde helpers for the indexing API's wire formats.
//!
//! The API is loose about numeric and time encodings: prices arrive as JSON
//! strings or numbers, timestamps as RFC 3339 strings or epoch milliseconds.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    String(String),
}

fn parse_decimal<E: serde::de::Error>(raw: NumberOrString) -> Result<Decimal, E> {
    let text = match raw {
        NumberOrString::Number(n) => n.to_string(),
        NumberOrString::String(s) => s,
    };
    Decimal::from_str(text.trim())
        .or_else(|_| Decimal::from_scientific(text.trim()))
        .map_err(|e| E::custom(format!("Invalid decimal `{}`: {}", text, e)))
}

/// Deserializes an optional price given as a string or a number; `null` and
/// `""` become `None`.
pub mod option_decimal {
    use super::*;
    use serde::Deserializer;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NumberOrString>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
            Some(raw) => parse_decimal(raw).map(Some),
        }
    }
}

/// Deserializes an RFC 3339 string or Unix-millis integer into `DateTime<Utc>`.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Millis(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis))),
            RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    serde::de::Error::custom(format!("Invalid timestamp `{}`: {}", text, e))
                }),
        }
    }
}
