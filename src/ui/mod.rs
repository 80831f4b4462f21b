//! Presentation layer: view models and their text rendering.
//!
//! ```text
//! AppState → catalog_view / detail_view → view model → render_* → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types computed from state snapshots
//! - [`renderer`]: Plain-text formatting of view models

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_catalog, render_detail};
pub use viewmodel::{
    CatalogViewModel, DetailViewModel, FilterChip, HeaderInfo, ListBody, MovieCard, MovieDetail,
    PaginationInfo, SearchBarInfo, SearchDropdown,
};
