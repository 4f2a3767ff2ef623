//! View state — an immutable record replaced whole on every update.
//!
//! Each search takes a [`SearchTicket`] carrying the generation it started
//! under. Results commit only while that generation is still current, so a
//! slow response from a superseded search can never overwrite a newer one.

use crate::domain::collection::CollectionMetadata;
use crate::domain::floor_price::FloorPriceHistory;
use crate::shared::{Chain, ContractAddress, Interval};
use serde::{Deserialize, Serialize};

/// The form inputs. Overwritten by user edits only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub address: ContractAddress,
    pub chain: Chain,
    pub interval: Interval,
}

/// Snapshot of the inputs a search was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub input: SearchInput,
}

/// Which panels have data to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Partial,
    Complete,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    input: SearchInput,
    metadata: Option<CollectionMetadata>,
    history: Option<FloorPriceHistory>,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    pub fn metadata(&self) -> Option<&CollectionMetadata> {
        self.metadata.as_ref()
    }

    pub fn history(&self) -> Option<&FloorPriceHistory> {
        self.history.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        match (self.metadata.is_some(), self.history.is_some()) {
            (false, false) => Phase::Idle,
            (true, true) => Phase::Complete,
            _ => Phase::Partial,
        }
    }

    // ── Input edits ──────────────────────────────────────────────────────

    pub fn with_address(&self, address: ContractAddress) -> Self {
        Self {
            input: SearchInput {
                address,
                ..self.input.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_chain(&self, chain: Chain) -> Self {
        Self {
            input: SearchInput {
                chain,
                ..self.input.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_interval(&self, interval: Interval) -> Self {
        Self {
            input: SearchInput {
                interval,
                ..self.input.clone()
            },
            ..self.clone()
        }
    }

    // ── Search lifecycle ─────────────────────────────────────────────────

    /// Start a new search. Displayed results are kept until replaced.
    pub fn begin_search(&self) -> (Self, SearchTicket) {
        let generation = self.generation + 1;
        let ticket = SearchTicket {
            generation,
            input: self.input.clone(),
        };
        (
            Self {
                generation,
                ..self.clone()
            },
            ticket,
        )
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.generation == ticket.generation
    }

    /// Replace the metadata, or `None` if `ticket` is stale.
    pub fn with_metadata(&self, ticket: &SearchTicket, metadata: CollectionMetadata) -> Option<Self> {
        self.is_current(ticket).then(|| Self {
            metadata: Some(metadata),
            ..self.clone()
        })
    }

    /// Replace the history, or `None` if `ticket` is stale.
    pub fn with_history(&self, ticket: &SearchTicket, history: FloorPriceHistory) -> Option<Self> {
        self.is_current(ticket).then(|| Self {
            history: Some(history),
            ..self.clone()
        })
    }
}
