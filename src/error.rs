//! Unified tracker error types.

use thiserror::Error;

/// Top-level tracker error.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Classify the error for diagnostics.
    pub fn kind(&self) -> FailureKind {
        match self {
            TrackerError::Http(e) => e.kind(),
            TrackerError::Config(_) => FailureKind::Config,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HttpError {
    /// Classify the error for diagnostics.
    ///
    /// Any response that arrived but is not the expected payload counts as a
    /// parse failure; only transport errors are network failures.
    pub fn kind(&self) -> FailureKind {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) if e.is_decode() => FailureKind::ResponseParse,
            #[cfg(feature = "http")]
            HttpError::Reqwest(_) => FailureKind::Network,
            _ => FailureKind::ResponseParse,
        }
    }
}

/// The ways a fetch can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request could not complete.
    Network,
    /// The body was not valid JSON or lacked expected fields.
    ResponseParse,
    /// The client was never able to send: bad key, bad settings.
    Config,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::ResponseParse => write!(f, "response_parse"),
            FailureKind::Config => write!(f, "config"),
        }
    }
}
