//! Load-state machine for the genre taxonomy.
//!
//! The filter bar asks for genres whenever it is shown. Instead of inferring
//! "not loaded" from the taxonomy length, the catalog store tracks the fetch
//! explicitly so a taxonomy of any size is fetched at most once per success and
//! an in-flight fetch is never duplicated.
//!
//! ```text
//! NotLoaded ──observe──▶ Loading ──ok──▶ Loaded
//!     ▲                     │
//!     └──────── error ──────┘
//! ```

/// Genre taxonomy fetch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreLoad {
    /// Nothing fetched yet, or the last fetch failed.
    #[default]
    NotLoaded,

    /// A fetch is in flight; further observations do nothing.
    Loading,

    /// The taxonomy is present; it is never refetched.
    Loaded,
}
