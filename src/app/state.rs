//! Application state and view model computation.
//!
//! [`AppState`] owns the two stores: the catalog store ([`CatalogState`]) and
//! the entity detail store ([`DetailState`]). It is mutated only through
//! [`handle_event`](super::handle_event); everything else reads it, usually as
//! a cloned snapshot published by the coordinator.
//!
//! # View Model Computation
//!
//! [`AppState::catalog_view`] and [`AppState::detail_view`] turn a snapshot
//! into display-ready values for the renderer. They perform the read-side half
//! of pagination: the visible window is a slice of `filtered_movies`, and the
//! page-number buttons are a window of at most five pages around the current
//! one.
//!
//! # Example
//!
//! ```rust
//! use reelscope::app::AppState;
//! use reelscope::ui::ListBody;
//!
//! let state = AppState::new(1, "https://image.tmdb.org/t/p");
//! let view = state.catalog_view("");
//! assert_eq!(view.body, ListBody::Empty("No movies found.".to_string()));
//! ```

use super::catalog::CatalogState;
use super::detail::DetailState;
use crate::domain::Movie;
use crate::ui::viewmodel::{
    CatalogViewModel, DetailViewModel, FilterChip, HeaderInfo, ListBody, MovieCard, MovieDetail,
    PaginationInfo, SearchBarInfo, SearchDropdown,
};

/// Maximum number of page-number buttons.
const MAX_VISIBLE_PAGES: u32 = 5;

const EMPTY_LIST_MESSAGE: &str = "No movies found.";

/// Central state container.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub catalog: CatalogState,
    pub detail: DetailState,

    /// Popular-catalog pages fetched per `LoadCatalog`.
    pub catalog_pages: u32,

    /// Base for poster URLs, without the size segment.
    pub image_base_url: String,
}

impl AppState {
    #[must_use]
    pub fn new(catalog_pages: u32, image_base_url: impl Into<String>) -> Self {
        Self {
            catalog: CatalogState::new(),
            detail: DetailState::new(),
            catalog_pages: catalog_pages.max(1),
            image_base_url: image_base_url.into(),
        }
    }

    /// Computes the list screen for the current state.
    ///
    /// `search_input` is the text currently typed into the search box; it only
    /// drives the suggestion dropdown.
    #[must_use]
    pub fn catalog_view(&self, search_input: &str) -> CatalogViewModel {
        let catalog = &self.catalog;
        let window = catalog.visible_movies();

        let body = if catalog.loading {
            ListBody::Skeleton(catalog.movies_per_page)
        } else if let Some(error) = &catalog.error {
            ListBody::Error(error.clone())
        } else if window.is_empty() {
            ListBody::Empty(EMPTY_LIST_MESSAGE.to_string())
        } else {
            ListBody::Cards(window.iter().map(|movie| self.card(movie)).collect())
        };

        let pagination = matches!(body, ListBody::Cards(_)).then(|| self.pagination());

        CatalogViewModel {
            header: HeaderInfo {
                title: format!(" Movies ({}) ", catalog.filtered_movies.len()),
            },
            filters: self.filter_chips(),
            search: self.search_bar(search_input),
            body,
            pagination,
        }
    }

    /// Computes the detail screen for the current state.
    #[must_use]
    pub fn detail_view(&self) -> DetailViewModel {
        let detail = &self.detail;
        if detail.loading {
            return DetailViewModel::Loading;
        }
        if let Some(error) = &detail.error {
            return DetailViewModel::Error(error.clone());
        }
        let Some(movie) = &detail.entity else {
            return DetailViewModel::Empty;
        };

        DetailViewModel::Loaded(MovieDetail {
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            poster_url: movie.poster_url(&self.image_base_url),
            release_date: display_date(movie),
            runtime: format!("{} minutes", movie.runtime),
            rating: format!("{:.1} / 10", movie.vote_average),
            genres: join_names(movie.genres.iter().map(|g| g.name.as_str())),
            budget: format_dollars(movie.budget),
            revenue: format_dollars(movie.revenue),
            companies: join_names(movie.production_companies.iter().map(|c| c.name.as_str())),
        })
    }

    fn card(&self, movie: &Movie) -> MovieCard {
        MovieCard {
            id: movie.id,
            title: movie.title.clone(),
            release_date: display_date(movie),
            rating: (movie.vote_average > 0.0).then(|| format!("{:.1} / 10", movie.vote_average)),
            poster_url: movie.poster_url(&self.image_base_url),
            is_pending: movie.is_pending(),
        }
    }

    fn filter_chips(&self) -> Vec<FilterChip> {
        self.catalog
            .genres
            .iter()
            .map(|option| FilterChip {
                id: option.id.to_string(),
                name: option.name.clone(),
                is_selected: option.id == self.catalog.current_filter,
            })
            .collect()
    }

    fn search_bar(&self, search_input: &str) -> SearchBarInfo {
        let suggestions = self.catalog.suggestions(search_input);
        let dropdown = if suggestions.is_empty() {
            SearchDropdown::Recent(self.catalog.recent_searches.as_slice().to_vec())
        } else {
            SearchDropdown::Suggestions(suggestions)
        };
        SearchBarInfo {
            query: search_input.to_string(),
            dropdown,
        }
    }

    fn pagination(&self) -> PaginationInfo {
        let current = self.catalog.current_page;
        let last = self.catalog.filtered_page_count().max(1);

        PaginationInfo {
            current_page: current,
            last_page: last,
            pages: page_window(current, last),
            can_go_first: current > 1,
            can_go_previous: current > 1,
            can_go_next: current < last,
            can_go_last: current < last,
            label: format!("Page {current} of {last}"),
        }
    }
}

/// Page numbers to show around `current`, at most [`MAX_VISIBLE_PAGES`],
/// shifted to stay within `1..=last`.
fn page_window(current: u32, last: u32) -> Vec<u32> {
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = start.saturating_add(MAX_VISIBLE_PAGES - 1).min(last);
    if end - start + 1 < MAX_VISIBLE_PAGES {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }
    (start..=end).collect()
}

fn display_date(movie: &Movie) -> String {
    movie
        .release_date_parsed()
        .map_or_else(|| movie.release_date.clone(), |date| date.format("%B %-d, %Y").to_string())
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Formats a whole-dollar amount with thousands separators, e.g. `$1,250,000`.
fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Company, Genre, GenreFilter};

    fn loaded(count: usize) -> AppState {
        let mut state = AppState::new(1, "https://img/t/p");
        state.catalog.apply_catalog(
            (0..count)
                .map(|i| Movie::new(i as i64 + 1, format!("Movie {i}")))
                .collect(),
        );
        state
    }

    #[test]
    fn page_window_stays_within_bounds() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn dollars_are_grouped() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(1_000), "$1,000");
        assert_eq!(format_dollars(63_000_000), "$63,000,000");
    }

    #[test]
    fn loading_shows_skeletons_without_pagination() {
        let mut state = loaded(12);
        state.catalog.begin_catalog_load();
        let view = state.catalog_view("");
        assert_eq!(view.body, ListBody::Skeleton(10));
        assert_eq!(view.pagination, None);
    }

    #[test]
    fn error_takes_precedence_over_cards() {
        let mut state = loaded(12);
        state.catalog.fail("Failed to fetch movies: boom".into());
        let view = state.catalog_view("");
        assert_eq!(view.body, ListBody::Error("Failed to fetch movies: boom".into()));
        assert_eq!(view.pagination, None);
    }

    #[test]
    fn cards_show_current_page_with_controls() {
        let mut state = loaded(25);
        state.catalog.set_current_page(3);
        let view = state.catalog_view("");

        let ListBody::Cards(cards) = &view.body else {
            panic!("expected cards, got {:?}", view.body);
        };
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].id, 21);

        let pagination = view.pagination.unwrap();
        assert_eq!(pagination.label, "Page 3 of 3");
        assert_eq!(pagination.pages, vec![1, 2, 3]);
        assert!(pagination.can_go_previous);
        assert!(!pagination.can_go_next);
        assert!(!pagination.can_go_last);
    }

    #[test]
    fn out_of_range_page_renders_empty_message() {
        let mut state = loaded(5);
        state.catalog.set_current_page(4);
        let view = state.catalog_view("");
        assert_eq!(view.body, ListBody::Empty("No movies found.".into()));
        assert_eq!(view.pagination, None);
    }

    #[test]
    fn dropdown_prefers_suggestions_over_recent() {
        let mut state = loaded(3);
        state.catalog.recent_searches.insert("old query");

        let view = state.catalog_view("movie 1");
        assert_eq!(view.search.dropdown, SearchDropdown::Suggestions(vec!["Movie 1".into()]));

        let view = state.catalog_view("zzz");
        assert_eq!(view.search.dropdown, SearchDropdown::Recent(vec!["old query".into()]));
    }

    #[test]
    fn filter_chips_mark_current_filter() {
        let mut state = loaded(1);
        state.catalog.apply_genres(&[Genre { id: 28, name: "Action".into() }]);
        state.catalog.filter_by_genre(GenreFilter::Genre(28));

        let chips = state.catalog_view("").filters;
        assert_eq!(chips[0].id, "all");
        assert!(!chips[0].is_selected);
        assert_eq!(chips[1].id, "28");
        assert!(chips[1].is_selected);
    }

    #[test]
    fn detail_view_formats_fields() {
        let mut state = AppState::new(1, "https://img/t/p");
        state.detail.apply(Movie {
            overview: "Spice.".into(),
            release_date: "2021-10-22".into(),
            runtime: 155,
            vote_average: 7.84,
            poster_path: Some("/dune.jpg".into()),
            genres: vec![
                Genre { id: 878, name: "Science Fiction".into() },
                Genre { id: 12, name: "Adventure".into() },
            ],
            production_companies: vec![Company { name: "Legendary".into() }],
            budget: 165_000_000,
            ..Movie::new(438_631, "Dune")
        });

        let DetailViewModel::Loaded(detail) = state.detail_view() else {
            panic!("expected loaded detail");
        };
        assert_eq!(detail.release_date, "October 22, 2021");
        assert_eq!(detail.runtime, "155 minutes");
        assert_eq!(detail.rating, "7.8 / 10");
        assert_eq!(detail.genres, "Science Fiction, Adventure");
        assert_eq!(detail.budget, "$165,000,000");
        assert_eq!(detail.revenue, "$0");
        assert_eq!(detail.companies, "Legendary");
        assert_eq!(detail.poster_url.as_deref(), Some("https://img/t/p/w500/dune.jpg"));
    }

    #[test]
    fn detail_view_lifecycle() {
        let mut state = AppState::new(1, "https://img");
        assert_eq!(state.detail_view(), DetailViewModel::Empty);
        state.detail.begin_load(1);
        assert_eq!(state.detail_view(), DetailViewModel::Loading);
        state.detail.fail("Failed to fetch movie details: 404".into());
        assert_eq!(
            state.detail_view(),
            DetailViewModel::Error("Failed to fetch movie details: 404".into())
        );
    }
}
