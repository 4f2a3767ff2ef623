//! Tracker configuration — the API key and the endpoint it is sent to.

use crate::error::TrackerError;
use crate::network::{API_KEY_ENV, DEFAULT_API_URL};

/// Static API key for the indexing service. NEVER printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(***)")
    }
}

/// Configuration consumed by `FloorTrackerClient::from_config`.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub api_key: ApiKey,
    pub base_url: String,
}

impl TrackerConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Read the API key from `MORALIS_API_KEY`.
    ///
    /// The key is the only setting taken from the environment.
    pub fn from_env() -> Result<Self, TrackerError> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| TrackerError::Config(format!("{} is not set", API_KEY_ENV)))?;
        Self::from_key(&key)
    }

    fn from_key(key: &str) -> Result<Self, TrackerError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(TrackerError::Config(format!("{} is empty", API_KEY_ENV)));
        }
        Ok(Self::new(ApiKey::new(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_is_redacted() {
        let config = TrackerConfig::new(ApiKey::new("super-secret"));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("ApiKey(***)"));
    }

    #[test]
    fn test_from_key_trims_and_rejects_blank() {
        let config = TrackerConfig::from_key("  abc \n").unwrap();
        assert_eq!(config.api_key.expose(), "abc");
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(matches!(
            TrackerConfig::from_key("   "),
            Err(TrackerError::Config(_))
        ));
    }
}
