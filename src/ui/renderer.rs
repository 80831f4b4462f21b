//! Plain-text rendering of view models.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → [`CatalogViewModel`] / [`DetailViewModel`]
//! 2. **Formatting**: view model → text, one section per component
//!
//! # Example
//!
//! ```rust
//! use reelscope::app::AppState;
//! use reelscope::ui::render_catalog;
//!
//! let state = AppState::new(1, "https://image.tmdb.org/t/p");
//! let text = render_catalog(&state.catalog_view(""));
//! assert!(text.contains("No movies found."));
//! ```

use std::fmt::Write as _;

use crate::ui::viewmodel::{
    CatalogViewModel, DetailViewModel, ListBody, MovieCard, PaginationInfo, SearchDropdown,
};

/// One placeholder card.
const SKELETON_ROW: &str = "  ░░░░░░░░░░░░░░░░░░░░\n";

/// Renders the list screen.
#[must_use]
pub fn render_catalog(vm: &CatalogViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=={}==", vm.header.title);

    if !vm.filters.is_empty() {
        let chips: Vec<String> = vm
            .filters
            .iter()
            .map(|chip| {
                if chip.is_selected {
                    format!("[{}]", chip.name)
                } else {
                    chip.name.clone()
                }
            })
            .collect();
        let _ = writeln!(out, "Genres: {}", chips.join(" | "));
    }

    render_search(&mut out, vm);
    out.push('\n');

    match &vm.body {
        ListBody::Skeleton(count) => {
            for _ in 0..*count {
                out.push_str(SKELETON_ROW);
            }
        }
        ListBody::Error(message) => {
            let _ = writeln!(out, "  ! {message}");
        }
        ListBody::Empty(message) => {
            let _ = writeln!(out, "  {message}");
        }
        ListBody::Cards(cards) => {
            for card in cards {
                render_card(&mut out, card);
            }
        }
    }

    if let Some(pagination) = &vm.pagination {
        out.push('\n');
        render_pagination(&mut out, pagination);
    }

    out
}

fn render_search(out: &mut String, vm: &CatalogViewModel) {
    if !vm.search.query.is_empty() {
        let _ = writeln!(out, "Search: {}", vm.search.query);
    }

    let (label, items) = match &vm.search.dropdown {
        SearchDropdown::Suggestions(items) => ("Suggestions", items),
        SearchDropdown::Recent(items) => ("Recent", items),
    };
    if !items.is_empty() {
        let _ = writeln!(out, "{label}: {}", items.join(", "));
    }
}

fn render_card(out: &mut String, card: &MovieCard) {
    let _ = write!(out, "  #{:<8} {}", card.id, card.title);
    if !card.release_date.is_empty() {
        let _ = write!(out, "  ({})", card.release_date);
    }
    if let Some(rating) = &card.rating {
        let _ = write!(out, "  {rating}");
    }
    if card.is_pending {
        out.push_str("  [pending]");
    }
    out.push('\n');
}

fn render_pagination(out: &mut String, pagination: &PaginationInfo) {
    let arrow = |enabled: bool, text: &'static str| if enabled { text } else { " " };

    let pages: Vec<String> = pagination
        .pages
        .iter()
        .map(|&page| {
            if page == pagination.current_page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();

    let _ = writeln!(
        out,
        "  {} {} {} {} {}   {}",
        arrow(pagination.can_go_first, "«"),
        arrow(pagination.can_go_previous, "‹"),
        pages.join(" "),
        arrow(pagination.can_go_next, "›"),
        arrow(pagination.can_go_last, "»"),
        pagination.label,
    );
}

/// Renders the detail screen. Returns an empty string when nothing is loaded.
#[must_use]
pub fn render_detail(vm: &DetailViewModel) -> String {
    let detail = match vm {
        DetailViewModel::Loading => return "  ░░░░ loading ░░░░\n".to_string(),
        DetailViewModel::Error(message) => return format!("  ! {message}\n"),
        DetailViewModel::Empty => return String::new(),
        DetailViewModel::Loaded(detail) => detail,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.title);
    if let Some(url) = &detail.poster_url {
        let _ = writeln!(out, "{url}");
    }
    let _ = writeln!(out, "\n{}\n", detail.overview);
    out.push_str("Details\n");
    let _ = writeln!(out, "  Release Date: {}", detail.release_date);
    let _ = writeln!(out, "  Runtime: {}", detail.runtime);
    let _ = writeln!(out, "  Rating: {}", detail.rating);
    let _ = writeln!(out, "  Genres: {}", detail.genres);
    out.push_str("Production\n");
    let _ = writeln!(out, "  Budget: {}", detail.budget);
    let _ = writeln!(out, "  Revenue: {}", detail.revenue);
    let _ = writeln!(out, "  Companies: {}", detail.companies);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{FilterChip, HeaderInfo, SearchBarInfo};

    fn view(body: ListBody, pagination: Option<PaginationInfo>) -> CatalogViewModel {
        CatalogViewModel {
            header: HeaderInfo {
                title: " Movies (1) ".into(),
            },
            filters: vec![
                FilterChip {
                    id: "all".into(),
                    name: "All Genres".into(),
                    is_selected: true,
                },
                FilterChip {
                    id: "28".into(),
                    name: "Action".into(),
                    is_selected: false,
                },
            ],
            search: SearchBarInfo {
                query: String::new(),
                dropdown: SearchDropdown::Recent(vec!["dune".into()]),
            },
            body,
            pagination,
        }
    }

    #[test]
    fn renders_cards_and_pagination() {
        let vm = view(
            ListBody::Cards(vec![MovieCard {
                id: 1,
                title: "Dune".into(),
                release_date: "October 22, 2021".into(),
                rating: Some("7.8 / 10".into()),
                poster_url: None,
                is_pending: false,
            }]),
            Some(PaginationInfo {
                current_page: 1,
                last_page: 2,
                pages: vec![1, 2],
                can_go_first: false,
                can_go_previous: false,
                can_go_next: true,
                can_go_last: true,
                label: "Page 1 of 2".into(),
            }),
        );

        let text = render_catalog(&vm);
        assert!(text.contains("Genres: [All Genres] | Action"));
        assert!(text.contains("Recent: dune"));
        assert!(text.contains("Dune  (October 22, 2021)  7.8 / 10"));
        assert!(text.contains("[1] 2 › »   Page 1 of 2"));
    }

    #[test]
    fn renders_skeletons_while_loading() {
        let text = render_catalog(&view(ListBody::Skeleton(3), None));
        assert_eq!(text.matches(SKELETON_ROW).count(), 3);
        assert!(!text.contains("Page"));
    }

    #[test]
    fn empty_detail_renders_nothing() {
        assert!(render_detail(&DetailViewModel::Empty).is_empty());
        assert!(render_detail(&DetailViewModel::Error("boom".into())).contains("! boom"));
    }
}
