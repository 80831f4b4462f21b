//! Request and response protocol between the stores and the fetch runtime.
//!
//! Stores never await I/O. A store operation that needs the remote catalog emits a
//! [`ClientRequest`]; the runtime executes it and feeds the matching
//! [`ClientResponse`] back as an event. Requests are not correlated or
//! de-duplicated, so overlapping requests of the same kind resolve in completion
//! order.

use crate::domain::{Genre, Movie};

/// Where a search was started from.
///
/// Both origins resolve identically and record the term in recent searches. Only
/// user searches are reflected back into navigable location state; a location
/// restore already has the term in its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrigin {
    User,
    Location,
}

/// Which store a request belongs to. Used to route failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Catalog,
    Genres,
    Search,
    Entity,
}

/// Remote work requested by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRequest {
    /// Fetch `pages` consecutive pages of the popular catalog, starting at 1.
    LoadCatalog { pages: u32 },

    /// Fetch the genre taxonomy.
    LoadGenres,

    /// Remote fallback for a search with no local match.
    Search { query: String, origin: SearchOrigin },

    /// Fetch one movie with detail fields.
    LoadEntity { id: i64 },
}

impl ClientRequest {
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::LoadCatalog { .. } => RequestKind::Catalog,
            Self::LoadGenres => RequestKind::Genres,
            Self::Search { .. } => RequestKind::Search,
            Self::LoadEntity { .. } => RequestKind::Entity,
        }
    }
}

/// Outcome of a [`ClientRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClientResponse {
    CatalogLoaded {
        movies: Vec<Movie>,
    },

    GenresLoaded {
        genres: Vec<Genre>,
    },

    SearchResolved {
        query: String,
        origin: SearchOrigin,
        movies: Vec<Movie>,
    },

    EntityLoaded {
        movie: Movie,
    },

    /// The request failed; `message` is what the owning store will display.
    Error {
        request: RequestKind,
        message: String,
    },
}
