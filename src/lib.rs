//! # NFT Floor Tracker
//!
//! Looks up an NFT collection on the Moralis indexing API and presents its
//! metadata and floor-price history. Supports both native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared enums, domain models, chart adapter (always available, WASM-safe)
//! 2. **HTTP API** — `MoralisHttp`, one method per endpoint
//! 3. **High-Level Client** — `FloorTrackerClient` with nested sub-clients
//! 4. **Presentation** — `Shell` view state with generation-guarded searches
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nft_floor_tracker::prelude::*;
//!
//! let client = FloorTrackerClient::from_config(TrackerConfig::from_env()?)?;
//! let shell = Shell::new(client);
//!
//! shell.set_address("0xbd3531da5cf5857e7cfaa92426877b022e612cf8").await;
//! shell.set_interval(Interval::Day30).await;
//! shell.search().await;
//!
//! let view = shell.view().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Chart adapter: series projection and Chart.js configuration.
pub mod chart;

/// Unified error types.
pub mod error;

/// Network URL and header constants.
pub mod network;

/// API key and endpoint configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `FloorTrackerClient` — the primary API entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Presentation ────────────────────────────────────────────────────

/// View state, search shell, render models.
pub mod view;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared enums
    pub use crate::shared::{Chain, ContractAddress, Interval};

    // Domain types
    pub use crate::domain::collection::CollectionMetadata;
    pub use crate::domain::floor_price::{FloorPriceHistory, FloorPricePoint};

    // Chart
    pub use crate::chart::{ChartConfig, ChartSeries};

    // Errors + config
    pub use crate::config::{ApiKey, TrackerConfig};
    pub use crate::error::{FailureKind, HttpError, TrackerError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CollectionsClient, FloorPricesClient, FloorTrackerClient, FloorTrackerClientBuilder,
    };

    // Presentation
    pub use crate::view::{
        ChartPanel, CollectionSource, MetadataPanel, Phase, SearchInput, Shell, StateChange, View,
        ViewState,
    };
}
