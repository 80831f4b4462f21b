//! Actions representing side effects to be executed by the coordinator.
//!
//! The event handler never performs I/O. It mutates state and returns a
//! `Vec<Action>` describing what the runtime should do next; the coordinator
//! executes them in order.
//!
//! # Example
//!
//! ```rust
//! use reelscope::app::Action;
//! use reelscope::client::ClientRequest;
//!
//! let actions = vec![Action::Fetch(ClientRequest::LoadGenres)];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::client::ClientRequest;

/// Commands produced by [`handle_event`](super::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a request against the catalog client.
    ///
    /// The outcome comes back as
    /// [`Event::ClientResponse`](super::Event::ClientResponse). Requests are
    /// neither de-duplicated nor cancelled.
    Fetch(ClientRequest),

    /// Records the active search term as navigable location state.
    ///
    /// Emitted for user-initiated searches only; a search restored from the
    /// location does not write it back.
    ReflectQuery {
        /// Term to reflect. Empty clears the location query.
        query: String,
    },
}
