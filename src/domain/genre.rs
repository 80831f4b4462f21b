//! Genre taxonomy and the genre filter value.
//!
//! Remote genres carry numeric ids. The filter bar additionally shows a synthetic
//! "All Genres" entry whose id is the string `"all"`; that sentinel is a filter
//! value, never a catalog value, so it lives in [`GenreFilter`] rather than in
//! [`Genre`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CatalogError;

/// Display name of the sentinel filter entry.
pub const ALL_GENRES_LABEL: &str = "All Genres";

/// Wire value of the sentinel filter entry.
pub const ALL_GENRES_ID: &str = "all";

/// A named genre as returned by the remote taxonomy and by detail fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// The active genre filter: either the "all" sentinel or one numeric genre id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Genre(i64),
}

impl GenreFilter {
    /// Returns `true` if a movie with the given list-level genre ids passes this filter.
    #[must_use]
    pub fn matches(self, genre_ids: &[i64]) -> bool {
        match self {
            Self::All => true,
            Self::Genre(id) => genre_ids.contains(&id),
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_GENRES_ID),
            Self::Genre(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for GenreFilter {
    type Err = CatalogError;

    /// Parses `"all"` or a decimal genre id.
    ///
    /// ```
    /// use reelscope::GenreFilter;
    ///
    /// assert_eq!("all".parse::<GenreFilter>().unwrap(), GenreFilter::All);
    /// assert_eq!(" 28 ".parse::<GenreFilter>().unwrap(), GenreFilter::Genre(28));
    /// assert!("action".parse::<GenreFilter>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == ALL_GENRES_ID {
            return Ok(Self::All);
        }
        s.parse::<i64>()
            .map(Self::Genre)
            .map_err(|_| CatalogError::Validation(format!("invalid genre filter: {s:?}")))
    }
}

impl Serialize for GenreFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GenreFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One selectable entry of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: GenreFilter,
    pub name: String,
}

impl FilterOption {
    /// The "All Genres" sentinel entry.
    #[must_use]
    pub fn all() -> Self {
        Self {
            id: GenreFilter::All,
            name: ALL_GENRES_LABEL.to_string(),
        }
    }

    /// Builds the filter bar from a remote taxonomy, sentinel first.
    #[must_use]
    pub fn taxonomy(genres: &[Genre]) -> Vec<Self> {
        std::iter::once(Self::all())
            .chain(genres.iter().map(|genre| Self {
                id: GenreFilter::Genre(genre.id),
                name: genre.name.clone(),
            }))
            .collect()
    }
}
