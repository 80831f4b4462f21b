//! View model types representing renderable catalog state.
//!
//! View models are computed from an [`AppState`](crate::app::AppState) snapshot
//! by `AppState::catalog_view` and `AppState::detail_view`, and contain no
//! business logic. Strings are already formatted for display.

/// Everything the catalog list screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewModel {
    pub header: HeaderInfo,

    /// Genre filter bar. Empty until the taxonomy has loaded.
    pub filters: Vec<FilterChip>,

    pub search: SearchBarInfo,

    pub body: ListBody,

    /// Present only when the list shows movie cards.
    pub pagination: Option<PaginationInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// One entry of the genre filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// Filter value as accepted by `GenreFilter::from_str`.
    pub id: String,
    pub name: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub dropdown: SearchDropdown,
}

/// Entries listed under the search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDropdown {
    /// Catalog titles containing the typed text.
    Suggestions(Vec<String>),

    /// Shown when there are no suggestions. Most recent first.
    Recent(Vec<String>),
}

impl SearchDropdown {
    #[must_use]
    pub fn items(&self) -> &[String] {
        match self {
            Self::Suggestions(items) | Self::Recent(items) => items,
        }
    }
}

/// Main area of the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// Placeholder cards shown while loading.
    Skeleton(usize),

    Error(String),

    /// Nothing on the current page.
    Empty(String),

    Cards(Vec<MovieCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub id: i64,
    pub title: String,

    /// Release date formatted like `October 22, 2021`. Unparseable dates pass
    /// through unchanged; empty when unknown.
    pub release_date: String,

    /// `x.x / 10`, or `None` when the movie is unrated.
    pub rating: Option<String>,

    pub poster_url: Option<String>,

    /// Added locally and never confirmed by the remote catalog.
    pub is_pending: bool,
}

/// Pagination controls under the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub last_page: u32,

    /// Page-number buttons, at most five, around the current page.
    pub pages: Vec<u32>,

    pub can_go_first: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub can_go_last: bool,

    /// `Page X of Y`.
    pub label: String,
}

/// Entity detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailViewModel {
    Loading,
    Error(String),

    /// Nothing loaded yet.
    Empty,

    Loaded(MovieDetail),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetail {
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub release_date: String,

    /// `N minutes`.
    pub runtime: String,

    /// `x.x / 10`.
    pub rating: String,

    /// Comma-joined genre names.
    pub genres: String,

    /// Dollar amount with thousands separators.
    pub budget: String,
    pub revenue: String,

    /// Comma-joined production company names.
    pub companies: String,
}
