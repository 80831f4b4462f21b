//! Application layer: the stores, their events, and their actions.
//!
//! This module sits between the coordinator (which owns the runtime) and the
//! domain/client layers. All state lives in [`AppState`] and changes only
//! through [`handle_event`].
//!
//! # Architecture
//!
//! ```text
//! Intent → Event → handle_event → State Mutation → Actions → Fetch
//!                       ↑                                      ↓
//!                       └──────── Event::ClientResponse ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`catalog`]: Catalog store: fetched movies, search, filter, pagination
//! - [`detail`]: Entity detail store
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Genre taxonomy load state
//! - [`recent`]: Recent-search history
//! - [`state`]: State container and view model computation

pub mod actions;
pub mod catalog;
pub mod detail;
pub mod handler;
pub mod modes;
pub mod recent;
pub mod state;

pub use actions::Action;
pub use catalog::{CatalogState, SearchStep, MOVIES_PER_PAGE};
pub use detail::DetailState;
pub use handler::{handle_event, Event};
pub use modes::GenreLoad;
pub use recent::{RecentSearches, RECENT_SEARCH_LIMIT};
pub use state::AppState;
