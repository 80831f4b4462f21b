//! Domain layer: catalog records, genre filter values, and errors.
//!
//! These types are independent of the HTTP client and the store machinery.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`genre`]: Genres, the "all" sentinel, and filter options
//! - [`movie`]: Movie record and the add-movie draft

pub mod error;
pub mod genre;
pub mod movie;

pub use error::{CatalogError, Result};
pub use genre::{FilterOption, Genre, GenreFilter};
pub use movie::{Company, Movie, MovieDraft, Provenance};
