//! Shared newtypes and enums used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize to the
//! same strings the indexing API uses in paths and query parameters.

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string names no known `Chain` or `Interval`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// ─── ContractAddress ─────────────────────────────────────────────────────────

/// NFT collection contract address (e.g. `"0xbd3531da5cf5857e7cfaa92426877b022e612cf8"`).
///
/// Free text: the format is not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContractAddress(String);

impl ContractAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContractAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContractAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for ContractAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContractAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ContractAddress(s))
    }
}

// ─── Chain ───────────────────────────────────────────────────────────────────

/// Supported blockchain networks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Eth,
    Base,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Eth, Chain::Base];

    /// Value of the `chain` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eth => "eth",
            Self::Base => "base",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Eth => "Ethereum",
            Self::Base => "Base",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Chain {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "chain",
                value: s.to_string(),
            })
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Time window of the floor-price history ("chart duration").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1d")]
    Day1,
    #[default]
    #[serde(rename = "7d")]
    Day7,
    #[serde(rename = "30d")]
    Day30,
    #[serde(rename = "60d")]
    Day60,
    #[serde(rename = "90d")]
    Day90,
    #[serde(rename = "1y")]
    Year1,
    #[serde(rename = "all")]
    All,
}

impl Interval {
    pub const ALL: [Interval; 7] = [
        Interval::Day1,
        Interval::Day7,
        Interval::Day30,
        Interval::Day60,
        Interval::Day90,
        Interval::Year1,
        Interval::All,
    ];

    /// Value of the `interval` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day1 => "1d",
            Self::Day7 => "7d",
            Self::Day30 => "30d",
            Self::Day60 => "60d",
            Self::Day90 => "90d",
            Self::Year1 => "1y",
            Self::All => "all",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day1 => "1 Day",
            Self::Day7 => "7 Days",
            Self::Day30 => "30 Days",
            Self::Day60 => "60 Days",
            Self::Day90 => "90 Days",
            Self::Year1 => "1 Year",
            Self::All => "All Time",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "interval",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_address_serde() {
        let addr = ContractAddress::from("0xABC");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0xABC\"");
        let back: ContractAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn test_chain_serde_matches_query_value() {
        for chain in Chain::ALL {
            let json = serde_json::to_string(&chain).unwrap();
            assert_eq!(json, format!("\"{}\"", chain.as_str()));
        }
        let base: Chain = serde_json::from_str("\"base\"").unwrap();
        assert_eq!(base, Chain::Base);
    }

    #[test]
    fn test_chain_from_str() {
        assert_eq!("eth".parse::<Chain>().unwrap(), Chain::Eth);
        let err = "polygon".parse::<Chain>().unwrap_err();
        assert_eq!(err.to_string(), "unknown chain `polygon`");
    }

    #[test]
    fn test_interval_serde_matches_query_value() {
        for interval in Interval::ALL {
            let json = serde_json::to_string(&interval).unwrap();
            assert_eq!(json, format!("\"{}\"", interval.as_str()));
            assert_eq!(interval.as_str().parse::<Interval>().unwrap(), interval);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Chain::default(), Chain::Eth);
        assert_eq!(Interval::default(), Interval::Day7);
        assert_eq!(Interval::All.label(), "All Time");
    }
}
