//! Movie domain model and the add-movie draft.
//!
//! A [`Movie`] is immutable once fetched. List and search fetches populate
//! `genre_ids`; only a detail fetch populates the named `genres` list together
//! with `runtime`, `production_companies`, `budget`, and `revenue`. The two genre
//! representations describe the same relationship at different fetch granularities
//! and are kept separate.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::genre::Genre;

/// Poster size segment used when building image URLs.
const POSTER_SIZE: &str = "w500";

/// Where a movie record came from.
///
/// Fetched records are [`Provenance::Remote`]. Records synthesized by the
/// optimistic add-movie path have a client-generated id that no server has
/// confirmed; they stay [`Provenance::PendingReconciliation`] and their id must
/// not be treated as durable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provenance {
    #[default]
    Remote,
    PendingReconciliation,
}

/// A production company credited on a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub genre_ids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(deserialize_with = "null_as_default")]
    pub vote_average: f64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub runtime: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub production_companies: Vec<Company>,
    #[serde(deserialize_with = "null_as_default")]
    pub budget: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub revenue: u64,
    #[serde(skip)]
    pub provenance: Provenance,
}

impl Default for Movie {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            overview: String::new(),
            release_date: String::new(),
            genre_ids: Vec::new(),
            genres: Vec::new(),
            vote_average: 0.0,
            poster_path: None,
            backdrop_path: None,
            runtime: 0,
            production_companies: Vec::new(),
            budget: 0,
            revenue: 0,
            provenance: Provenance::Remote,
        }
    }
}

impl Movie {
    /// Creates a bare remote movie with only an id and title.
    ///
    /// ```
    /// use reelscope::Movie;
    ///
    /// let movie = Movie::new(1, "Dune");
    /// assert_eq!(movie.title, "Dune");
    /// assert!(movie.genre_ids.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if `needle_lower` occurs in the title or overview.
    ///
    /// The needle must already be lowercased; matching is plain substring
    /// containment with no ranking.
    #[must_use]
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.overview.to_lowercase().contains(needle_lower)
    }

    /// Parses `release_date` as an ISO date, if it is one.
    #[must_use]
    pub fn release_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }

    /// Full poster URL under the given image base, if the movie has a poster.
    #[must_use]
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}/{POSTER_SIZE}{path}", image_base_url.trim_end_matches('/')))
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.provenance, Provenance::PendingReconciliation)
    }
}

/// Raw add-movie form input.
///
/// Every field is free text, as typed by the user. Nothing is validated: numeric
/// fields that fail to parse become zero (or, for the genre, an empty id list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub overview: String,
    pub genre: String,
    pub release_date: String,
    pub runtime: String,
}

impl MovieDraft {
    /// Synthesizes a pending movie from this draft with the given client id.
    #[must_use]
    pub fn into_movie(self, id: i64) -> Movie {
        let genre_ids = self.genre.trim().parse::<i64>().map(|g| vec![g]).unwrap_or_default();
        let runtime = self.runtime.trim().parse::<u32>().unwrap_or_else(|_| {
            tracing::debug!(runtime = %self.runtime, "draft runtime is not numeric, using 0");
            0
        });

        Movie {
            id,
            title: self.title,
            overview: self.overview,
            release_date: self.release_date,
            genre_ids,
            poster_path: Some(String::new()),
            backdrop_path: Some(String::new()),
            runtime,
            provenance: Provenance::PendingReconciliation,
            ..Movie::default()
        }
    }
}

/// Treats an explicit JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
