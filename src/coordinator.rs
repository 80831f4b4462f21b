//! Runtime owner of the stores.
//!
//! [`Coordinator`] is the single writer of [`AppState`]. Intents are turned
//! into [`Event`]s and applied synchronously through
//! [`handle_event`](crate::app::handle_event); the resulting fetch actions run
//! as spawned tokio tasks, and their outcomes are fed back as events when the
//! caller drives [`Coordinator::next_completion`] or [`Coordinator::settle`].
//! Readers never touch the live state: they get cloned snapshots, either on
//! demand or pushed over a broadcast channel after every change.
//!
//! Overlapping fetches are neither de-duplicated nor cancelled. Completions are
//! applied in the order they finish, so the last one to finish wins.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tracing::Instrument;

use crate::app::{handle_event, Action, AppState, Event};
use crate::client::{execute, CatalogClient, ClientResponse, TmdbClient};
use crate::domain::error::{CatalogError, Result};
use crate::domain::{GenreFilter, Movie, MovieDraft};
use crate::Config;

/// Default capacity of the snapshot broadcast channel.
const SNAPSHOT_CAPACITY: usize = 64;

/// Read-only view of the stores handed to subscribers.
pub type Snapshot = Arc<AppState>;

pub struct Coordinator {
    state: AppState,
    client: Arc<dyn CatalogClient>,
    tasks: JoinSet<ClientResponse>,
    snapshots: broadcast::Sender<Snapshot>,
    location_query: Option<String>,
}

impl Coordinator {
    /// Creates a coordinator over an existing state and client.
    #[must_use]
    pub fn new(client: Arc<dyn CatalogClient>, state: AppState) -> Self {
        let (snapshots, _) = broadcast::channel(SNAPSHOT_CAPACITY);
        Self {
            state,
            client,
            tasks: JoinSet::new(),
            snapshots,
            location_query: None,
        }
    }

    /// Creates a coordinator backed by the HTTP client described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Remote`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = TmdbClient::new(config)?;
        let state = AppState::new(config.catalog_pages, config.image_base_url.clone());
        Ok(Self::new(Arc::new(client), state))
    }

    /// Applies one event and starts any fetches it requests.
    ///
    /// Returns whether state changed. Subscribers receive a snapshot when it did.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (changed, actions) = handle_event(&mut self.state, &event)?;

        for action in actions {
            self.execute_action(action);
        }

        if changed {
            self.publish();
        }
        Ok(changed)
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Fetch(request) => {
                let span = tracing::debug_span!("fetch", request = ?request.kind());
                let client = Arc::clone(&self.client);
                self.tasks.spawn(
                    async move { execute(client.as_ref(), request).await }.instrument(span),
                );
                tracing::debug!(in_flight = self.tasks.len(), "fetch spawned");
            }
            Action::ReflectQuery { query } => {
                tracing::debug!(query = %query, "reflecting query into location");
                self.location_query = (!query.is_empty()).then_some(query);
            }
        }
    }

    fn publish(&self) {
        // No subscribers is fine; snapshots are also available on demand.
        let _ = self.snapshots.send(self.snapshot());
    }

    /// Waits for the next in-flight fetch and applies its outcome.
    ///
    /// Returns `false` immediately if nothing is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Coordinator`] if a fetch task panicked or was
    /// aborted.
    pub async fn next_completion(&mut self) -> Result<bool> {
        let Some(joined) = self.tasks.join_next().await else {
            return Ok(false);
        };
        let response =
            joined.map_err(|e| CatalogError::Coordinator(format!("fetch task failed: {e}")))?;
        self.dispatch(Event::ClientResponse(response))?;
        Ok(true)
    }

    /// Applies completions until no fetch is in flight.
    ///
    /// # Errors
    ///
    /// See [`next_completion`](Self::next_completion).
    pub async fn settle(&mut self) -> Result<()> {
        while self.next_completion().await? {}
        Ok(())
    }

    /// Number of fetches started but not yet applied.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Arc::new(self.state.clone())
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Subscribes to snapshots published after each state change.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// Search term last reflected into location state by a user search.
    #[must_use]
    pub fn location_query(&self) -> Option<&str> {
        self.location_query.as_deref()
    }

    // ---- intents ----

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn load_catalog(&mut self) -> Result<bool> {
        self.dispatch(Event::LoadCatalog)
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn observe_genres(&mut self) -> Result<bool> {
        self.dispatch(Event::GenresObserved)
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn search(&mut self, query: &str) -> Result<bool> {
        self.dispatch(Event::Search {
            query: query.to_string(),
        })
    }

    /// Applies a query taken from location state, optionally with precomputed results.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn restore_query(&mut self, query: &str, results: Option<Vec<Movie>>) -> Result<bool> {
        if !query.trim().is_empty() {
            self.location_query = Some(query.to_string());
        }
        self.dispatch(Event::RestoreQuery {
            query: query.to_string(),
            results,
        })
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn clear_search(&mut self) -> Result<bool> {
        self.dispatch(Event::ClearSearch)
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn filter_by_genre(&mut self, filter: GenreFilter) -> Result<bool> {
        self.dispatch(Event::FilterByGenre(filter))
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn change_page(&mut self, page: u32) -> Result<bool> {
        self.dispatch(Event::ChangePage(page))
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn jump_to_page(&mut self, input: &str) -> Result<bool> {
        self.dispatch(Event::JumpToPage(input.to_string()))
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn select_entity(&mut self, id: i64) -> Result<bool> {
        self.dispatch(Event::SelectEntity(id))
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn add_movie(&mut self, draft: MovieDraft) -> Result<bool> {
        self.dispatch(Event::AddMovie(draft))
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn remove_recent_search(&mut self, term: &str) -> Result<bool> {
        self.dispatch(Event::RemoveRecentSearch(term.to_string()))
    }
}
