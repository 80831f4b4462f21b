//! Catalog store: the fetched movie set and everything derived from it.
//!
//! [`CatalogState`] separates the canonical fetched set (`movies`) from the view
//! over it (`filtered_movies`), which search and genre filtering replace. The
//! methods here are the store's synchronous mutations; fetching is requested by
//! the event handler and completed by the `apply_*` methods.
//!
//! # Search resolution
//!
//! [`CatalogState::resolve_search`] is local-first: a case-insensitive substring
//! match over title and overview of the movies already held wins outright, even
//! when the remote catalog might hold better matches. Only an empty local result
//! falls back to a remote search. This trades recall for latency and saves an API
//! call per repeated search.

use super::modes::GenreLoad;
use super::recent::RecentSearches;
use crate::domain::{FilterOption, Genre, GenreFilter, Movie, MovieDraft};

/// Number of movies shown per page.
pub const MOVIES_PER_PAGE: usize = 10;

/// What [`CatalogState::resolve_search`] decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// The query was blank; nothing changed.
    Ignored,

    /// Resolved from the local set; holds the match count.
    Local(usize),

    /// No local match; a remote search is required.
    Remote,
}

/// State owned by the catalog store.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Canonical fetched set, in fetch order.
    pub movies: Vec<Movie>,

    /// Current view: a genre-filtered subset of `movies`, or search results.
    ///
    /// A remote search fallback may place movies here that are not in `movies`.
    pub filtered_movies: Vec<Movie>,

    pub loading: bool,

    pub error: Option<String>,

    pub recent_searches: RecentSearches,

    /// One-based page within `filtered_movies`. Not clamped by the store.
    pub current_page: u32,

    /// Page count of `movies` as of the last full catalog load.
    pub total_pages: u32,

    pub movies_per_page: usize,

    /// Filter bar entries, "All Genres" first once loaded.
    pub genres: Vec<FilterOption>,

    pub genre_load: GenreLoad,

    pub current_filter: GenreFilter,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            movies: Vec::new(),
            filtered_movies: Vec::new(),
            loading: false,
            error: None,
            recent_searches: RecentSearches::new(),
            current_page: 1,
            total_pages: 1,
            movies_per_page: MOVIES_PER_PAGE,
            genres: Vec::new(),
            genre_load: GenreLoad::NotLoaded,
            current_filter: GenreFilter::All,
        }
    }

    /// Number of pages needed for `count` movies; never less than one.
    #[must_use]
    pub fn page_count(&self, count: usize) -> u32 {
        let pages = count.div_ceil(self.movies_per_page.max(1)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Number of pages the current view spans. Zero when the view is empty.
    #[must_use]
    pub fn filtered_page_count(&self) -> u32 {
        if self.filtered_movies.is_empty() {
            return 0;
        }
        self.page_count(self.filtered_movies.len())
    }

    /// The slice of `filtered_movies` shown on `page`. Empty when out of range.
    #[must_use]
    pub fn page_window(&self, page: u32) -> &[Movie] {
        let per_page = self.movies_per_page;
        let Some(first) = (page as usize).checked_sub(1).map(|p| p.saturating_mul(per_page)) else {
            return &[];
        };
        let len = self.filtered_movies.len();
        let start = first.min(len);
        let end = first.saturating_add(per_page).min(len);
        &self.filtered_movies[start..end]
    }

    /// The slice of `filtered_movies` shown on the current page.
    #[must_use]
    pub fn visible_movies(&self) -> &[Movie] {
        self.page_window(self.current_page)
    }

    // ---- catalog load ----

    pub fn begin_catalog_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replaces the catalog with a full fetch result.
    pub fn apply_catalog(&mut self, movies: Vec<Movie>) {
        self.total_pages = self.page_count(movies.len());
        self.filtered_movies.clone_from(&movies);
        self.movies = movies;
        self.loading = false;

        tracing::debug!(
            movie_count = self.movies.len(),
            total_pages = self.total_pages,
            "catalog replaced"
        );
    }

    /// Records a failed fetch. Previously loaded movies and the current view stay.
    pub fn fail(&mut self, message: String) {
        tracing::debug!(error = %message, "catalog store error");
        self.error = Some(message);
        self.loading = false;
    }

    // ---- genres ----

    /// Starts a taxonomy fetch if none has succeeded or is in flight.
    ///
    /// Returns `true` if the caller should issue the fetch.
    pub fn begin_genre_load(&mut self) -> bool {
        if self.genre_load != GenreLoad::NotLoaded {
            return false;
        }
        self.genre_load = GenreLoad::Loading;
        true
    }

    pub fn apply_genres(&mut self, genres: &[Genre]) {
        self.genres = FilterOption::taxonomy(genres);
        self.genre_load = GenreLoad::Loaded;
    }

    pub fn genre_load_failed(&mut self) {
        self.genre_load = GenreLoad::NotLoaded;
    }

    // ---- search ----

    /// Movies in `movies` whose title or overview contains `query`, ignoring case.
    #[must_use]
    pub fn local_matches(&self, query: &str) -> Vec<Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.matches_text(&needle))
            .cloned()
            .collect()
    }

    /// Runs the local half of search resolution.
    ///
    /// A blank query is ignored. A non-empty local match becomes the view and the
    /// query is recorded. Otherwise the store enters the loading state and the
    /// caller must issue a remote search, completed by
    /// [`apply_search_results`](Self::apply_search_results).
    pub fn resolve_search(&mut self, query: &str) -> SearchStep {
        if query.trim().is_empty() {
            return SearchStep::Ignored;
        }

        let matches = self.local_matches(query);
        if matches.is_empty() {
            self.loading = true;
            return SearchStep::Remote;
        }

        let count = matches.len();
        self.show_results(matches);
        self.recent_searches.insert(query);
        SearchStep::Local(count)
    }

    /// Completes a remote search fallback.
    ///
    /// The results become the view. If nothing had been fetched yet, they also
    /// seed the canonical set.
    pub fn apply_search_results(&mut self, query: &str, movies: Vec<Movie>) {
        self.loading = false;
        if self.movies.is_empty() {
            tracing::debug!(result_count = movies.len(), "seeding catalog from search results");
            self.movies.clone_from(&movies);
        }
        self.show_results(movies);
        self.recent_searches.insert(query);
    }

    /// Replaces the view with externally supplied results, without resolution.
    pub fn show_results(&mut self, movies: Vec<Movie>) {
        self.filtered_movies = movies;
        self.current_page = 1;
    }

    /// Resets the view to the full catalog.
    pub fn reset_view(&mut self) {
        self.filtered_movies.clone_from(&self.movies);
    }

    /// Titles of held movies containing `query`, ignoring case, in catalog order.
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .map(|movie| movie.title.clone())
            .collect()
    }

    // ---- filter / paginate ----

    /// Restricts the view to one genre, or resets it for [`GenreFilter::All`].
    ///
    /// Always returns to page one.
    pub fn filter_by_genre(&mut self, filter: GenreFilter) {
        let _span = tracing::debug_span!("filter_by_genre", filter = %filter).entered();

        self.current_filter = filter;
        self.filtered_movies = match filter {
            GenreFilter::All => self.movies.clone(),
            GenreFilter::Genre(_) => self
                .movies
                .iter()
                .filter(|movie| filter.matches(&movie.genre_ids))
                .cloned()
                .collect(),
        };
        self.current_page = 1;

        tracing::debug!(filtered_count = self.filtered_movies.len(), "genre filter applied");
    }

    /// Sets the page cursor as given. Range checks are the caller's job.
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
    }

    // ---- optimistic insert ----

    /// Appends a client-synthesized movie and resets the view to the full catalog.
    ///
    /// Returns the generated id. The id is the current Unix time in milliseconds,
    /// bumped past any id already held so two quick inserts cannot collide.
    pub fn add_optimistic(&mut self, draft: MovieDraft) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let id = self
            .movies
            .iter()
            .map(|movie| movie.id)
            .max()
            .map_or(now, |max| now.max(max.saturating_add(1)));

        self.movies.push(draft.into_movie(id));
        self.reset_view();
        id
    }
}
