//! Network constants for the Moralis indexing API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://deep-index.moralis.io/api/v2.2";

/// Header carrying the static API key on every request (`X-API-Key`).
pub const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "MORALIS_API_KEY";
