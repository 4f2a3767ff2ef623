//! Presentation shell — binds the form to view state and runs searches.
//!
//! A search starts both lookups back-to-back and lets each commit on its own
//! completion. Failures are logged and swallowed: the affected panel keeps
//! whatever it showed before.
//!
//! Front ends redraw from [`Shell::subscribe`]: every commit that changes the
//! state is announced as a [`StateChange`], so a panel can be drawn as soon as
//! its own lookup lands.

use super::source::CollectionSource;
use super::state::{SearchInput, SearchTicket, ViewState};
use super::View;
use crate::domain::collection::CollectionMetadata;
use crate::domain::floor_price::FloorPriceHistory;
use crate::error::TrackerError;
use crate::shared::{Chain, ContractAddress, Interval};

use async_lock::{Mutex, RwLock};
use futures_channel::mpsc;
use std::sync::Arc;

/// Which panel a committed result updated, and for which search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Metadata { generation: u64 },
    History { generation: u64 },
}

impl StateChange {
    pub fn generation(&self) -> u64 {
        match self {
            StateChange::Metadata { generation } | StateChange::History { generation } => {
                *generation
            }
        }
    }
}

/// The app-facing controller. Cheap to clone; clones share state.
pub struct Shell<S> {
    source: Arc<S>,
    state: Arc<RwLock<ViewState>>,
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<StateChange>>>>,
}

impl<S> Clone for Shell<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            state: self.state.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<S: CollectionSource> Shell<S> {
    pub fn new(source: S) -> Self {
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<S>) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(ViewState::new())),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Receive a [`StateChange`] after every successful commit. Dropping the
    /// receiver unsubscribes.
    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<StateChange> {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers.lock().await.push(tx);
        rx
    }

    // ── Form bindings ────────────────────────────────────────────────────

    pub async fn set_address(&self, address: impl Into<ContractAddress>) {
        let address = address.into();
        self.update(|s| s.with_address(address)).await;
    }

    pub async fn set_chain(&self, chain: Chain) {
        self.update(|s| s.with_chain(chain)).await;
    }

    pub async fn set_interval(&self, interval: Interval) {
        self.update(|s| s.with_interval(interval)).await;
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub async fn state(&self) -> ViewState {
        self.state.read().await.clone()
    }

    pub async fn input(&self) -> SearchInput {
        self.state.read().await.input().clone()
    }

    pub async fn view(&self) -> View {
        View::from_state(&*self.state.read().await)
    }

    // ── Search ───────────────────────────────────────────────────────────

    /// Run one search with the current inputs.
    pub async fn search(&self) {
        let ticket = self.begin_search().await;
        self.run_search(ticket).await;
    }

    /// Claim a new generation and snapshot the inputs.
    pub async fn begin_search(&self) -> SearchTicket {
        let mut state = self.state.write().await;
        let (next, ticket) = state.begin_search();
        *state = next;
        tracing::debug!(
            generation = ticket.generation,
            address = %ticket.input.address,
            chain = %ticket.input.chain,
            interval = %ticket.input.interval,
            "search started"
        );
        ticket
    }

    /// Fetch both panels for `ticket` concurrently; each commits independently.
    pub async fn run_search(&self, ticket: SearchTicket) {
        let input = &ticket.input;
        let metadata = async {
            let result = self.source.fetch_metadata(&input.address, input.chain).await;
            self.commit_metadata(&ticket, result).await;
        };
        let history = async {
            let result = self
                .source
                .fetch_history(&input.address, input.chain, input.interval)
                .await;
            self.commit_history(&ticket, result).await;
        };
        futures_util::future::join(metadata, history).await;
    }

    async fn commit_metadata(
        &self,
        ticket: &SearchTicket,
        result: Result<CollectionMetadata, TrackerError>,
    ) {
        let committed = match result {
            Ok(metadata) => {
                let mut state = self.state.write().await;
                match state.with_metadata(ticket, metadata) {
                    Some(next) => {
                        *state = next;
                        true
                    }
                    None => {
                        log_stale("metadata", ticket, state.generation());
                        false
                    }
                }
            }
            Err(e) => {
                log_failure("metadata", ticket, &e);
                false
            }
        };
        if committed {
            self.notify(StateChange::Metadata {
                generation: ticket.generation,
            })
            .await;
        }
    }

    async fn commit_history(
        &self,
        ticket: &SearchTicket,
        result: Result<FloorPriceHistory, TrackerError>,
    ) {
        let committed = match result {
            Ok(history) => {
                let mut state = self.state.write().await;
                match state.with_history(ticket, history) {
                    Some(next) => {
                        *state = next;
                        true
                    }
                    None => {
                        log_stale("floor_price_history", ticket, state.generation());
                        false
                    }
                }
            }
            Err(e) => {
                log_failure("floor_price_history", ticket, &e);
                false
            }
        };
        if committed {
            self.notify(StateChange::History {
                generation: ticket.generation,
            })
            .await;
        }
    }

    /// Fan out to live subscribers, dropping any whose receiver is gone.
    async fn notify(&self, change: StateChange) {
        let mut subscribers = self.subscribers.lock().await;
        subscribers.retain(|tx| tx.unbounded_send(change).is_ok());
    }

    async fn update(&self, f: impl FnOnce(&ViewState) -> ViewState) {
        let mut state = self.state.write().await;
        *state = f(&state);
    }
}

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
impl<S: CollectionSource + Send + Sync + 'static> Shell<S> {
    /// Run a search on the tokio runtime. In-flight searches are not
    /// cancelled; superseded results are dropped on arrival.
    pub fn trigger_search(&self) -> tokio::task::JoinHandle<()> {
        let shell = self.clone();
        tokio::spawn(async move { shell.search().await })
    }
}

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
impl<S: CollectionSource + 'static> Shell<S> {
    /// Run a search on the browser's microtask queue. In-flight searches are
    /// not cancelled; superseded results are dropped on arrival.
    pub fn trigger_search(&self) {
        let shell = self.clone();
        wasm_bindgen_futures::spawn_local(async move { shell.search().await });
    }
}

fn log_failure(endpoint: &'static str, ticket: &SearchTicket, error: &TrackerError) {
    tracing::error!(
        endpoint,
        kind = %error.kind(),
        generation = ticket.generation,
        address = %ticket.input.address,
        chain = %ticket.input.chain,
        "Error fetching {}: {}",
        endpoint,
        error
    );
}

fn log_stale(endpoint: &'static str, ticket: &SearchTicket, current: u64) {
    tracing::debug!(
        endpoint,
        generation = ticket.generation,
        current,
        "discarding result of superseded search"
    );
}
