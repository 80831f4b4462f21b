//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only function that mutates [`AppState`]. Intents
//! from the presentation layer and completions from the fetch runtime both
//! arrive as [`Event`]s and are processed one at a time, so no two mutations
//! ever interleave.
//!
//! # Event Types
//!
//! - **Catalog**: `LoadCatalog`, `GenresObserved`, `AddMovie`
//! - **Search**: `Search`, `RestoreQuery`, `ClearSearch`, `RemoveRecentSearch`
//! - **View**: `FilterByGenre`, `ChangePage`, `JumpToPage`
//! - **Detail**: `SelectEntity`
//! - **Completion**: `ClientResponse` carrying a typed fetch outcome
//!
//! # Example
//!
//! ```rust
//! use reelscope::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new(1, "https://image.tmdb.org/t/p");
//! let (changed, actions) = handle_event(&mut state, &Event::LoadCatalog)?;
//! assert!(changed);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), reelscope::CatalogError>(())
//! ```

use crate::app::catalog::SearchStep;
use crate::app::{Action, AppState};
use crate::client::{ClientRequest, ClientResponse, RequestKind, SearchOrigin};
use crate::domain::error::Result;
use crate::domain::{GenreFilter, Movie, MovieDraft};

/// Intents and completions processed by [`handle_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Fetches the popular catalog, replacing the held movies.
    LoadCatalog,

    /// The filter bar was shown. Fetches the genre taxonomy unless it is
    /// already loaded or loading.
    GenresObserved,

    /// User-initiated search.
    Search {
        query: String,
    },

    /// Search term taken from navigable location state on first load.
    ///
    /// With `results`, those become the view directly and no resolution runs.
    RestoreQuery {
        query: String,
        results: Option<Vec<Movie>>,
    },

    /// Drops the search and shows the full catalog again.
    ClearSearch,

    FilterByGenre(GenreFilter),

    /// Requests a page of the current view. Out-of-range pages are ignored.
    ChangePage(u32),

    /// Page number typed by the user. Non-numeric input is ignored.
    JumpToPage(String),

    /// Loads one movie into the detail store.
    SelectEntity(i64),

    /// Inserts a client-side movie without persisting it anywhere.
    AddMovie(MovieDraft),

    RemoveRecentSearch(String),

    /// Outcome of an earlier [`Action::Fetch`].
    ClientResponse(ClientResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag is `true` when readable state changed and subscribers
/// should be sent a fresh snapshot. Actions are executed by the coordinator in
/// order. Remote failures never surface as `Err`; they are recorded in the
/// owning store's `error` field.
///
/// # Errors
///
/// Reserved for failures of the state machine itself; no current event
/// produces one.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::LoadCatalog => {
            state.catalog.begin_catalog_load();
            let pages = state.catalog_pages;
            Ok((true, vec![Action::Fetch(ClientRequest::LoadCatalog { pages })]))
        }
        Event::GenresObserved => {
            if state.catalog.begin_genre_load() {
                tracing::debug!("genre taxonomy requested");
                Ok((true, vec![Action::Fetch(ClientRequest::LoadGenres)]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::Search { query } => Ok(search(state, query, SearchOrigin::User)),
        Event::RestoreQuery { query, results } => {
            if query.trim().is_empty() {
                state.catalog.reset_view();
                return Ok((true, vec![]));
            }
            match results {
                Some(results) => {
                    tracing::debug!(query = %query, result_count = results.len(), "restored precomputed results");
                    state.catalog.show_results(results.clone());
                    Ok((true, vec![]))
                }
                None => Ok(search(state, query, SearchOrigin::Location)),
            }
        }
        Event::ClearSearch => {
            state.catalog.reset_view();
            Ok((true, vec![Action::ReflectQuery { query: String::new() }]))
        }
        Event::FilterByGenre(filter) => {
            state.catalog.filter_by_genre(*filter);
            Ok((true, vec![]))
        }
        Event::ChangePage(page) => Ok((accept_page(state, *page), vec![])),
        Event::JumpToPage(input) => match input.trim().parse::<u32>() {
            Ok(page) => Ok((accept_page(state, page), vec![])),
            Err(_) => {
                tracing::debug!(input = %input, "ignoring non-numeric page");
                Ok((false, vec![]))
            }
        },
        Event::SelectEntity(id) => {
            state.detail.begin_load(*id);
            Ok((true, vec![Action::Fetch(ClientRequest::LoadEntity { id: *id })]))
        }
        Event::AddMovie(draft) => {
            let id = state.catalog.add_optimistic(draft.clone());
            tracing::debug!(movie_id = id, title = %draft.title, "movie added locally");
            Ok((true, vec![]))
        }
        Event::RemoveRecentSearch(term) => {
            let removed = state.catalog.recent_searches.remove(term);
            Ok((removed, vec![]))
        }
        Event::ClientResponse(response) => {
            apply_response(state, response);
            Ok((true, vec![]))
        }
    }
}

impl Event {
    const fn name(&self) -> &'static str {
        match self {
            Self::LoadCatalog => "load_catalog",
            Self::GenresObserved => "genres_observed",
            Self::Search { .. } => "search",
            Self::RestoreQuery { .. } => "restore_query",
            Self::ClearSearch => "clear_search",
            Self::FilterByGenre(_) => "filter_by_genre",
            Self::ChangePage(_) => "change_page",
            Self::JumpToPage(_) => "jump_to_page",
            Self::SelectEntity(_) => "select_entity",
            Self::AddMovie(_) => "add_movie",
            Self::RemoveRecentSearch(_) => "remove_recent_search",
            Self::ClientResponse(_) => "client_response",
        }
    }
}

fn search(state: &mut AppState, query: &str, origin: SearchOrigin) -> (bool, Vec<Action>) {
    let step = state.catalog.resolve_search(query);
    tracing::debug!(query = %query, origin = ?origin, step = ?step, "search resolved locally");

    let mut actions = match step {
        SearchStep::Ignored => return (false, vec![]),
        SearchStep::Local(_) => vec![],
        SearchStep::Remote => vec![Action::Fetch(ClientRequest::Search {
            query: query.to_string(),
            origin,
        })],
    };

    if origin == SearchOrigin::User {
        actions.push(Action::ReflectQuery {
            query: query.to_string(),
        });
    }

    (true, actions)
}

/// Accepts `page` if it lies within the current view. Returns whether it was accepted.
fn accept_page(state: &mut AppState, page: u32) -> bool {
    let last = state.catalog.filtered_page_count();
    if page < 1 || page > last {
        tracing::debug!(page = page, last_page = last, "ignoring out-of-range page");
        return false;
    }
    state.catalog.set_current_page(page);
    true
}

fn apply_response(state: &mut AppState, response: &ClientResponse) {
    match response {
        ClientResponse::CatalogLoaded { movies } => state.catalog.apply_catalog(movies.clone()),
        ClientResponse::GenresLoaded { genres } => state.catalog.apply_genres(genres),
        ClientResponse::SearchResolved { query, movies, .. } => {
            state.catalog.apply_search_results(query, movies.clone());
        }
        ClientResponse::EntityLoaded { movie } => state.detail.apply(movie.clone()),
        ClientResponse::Error { request, message } => {
            tracing::warn!(request = ?request, error = %message, "remote request failed");
            match request {
                RequestKind::Catalog | RequestKind::Search => state.catalog.fail(message.clone()),
                RequestKind::Genres => state.catalog.genre_load_failed(),
                RequestKind::Entity => state.detail.fail(message.clone()),
            }
        }
    }
}
