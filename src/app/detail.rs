//! Entity detail store.
//!
//! Holds the single movie shown by the detail view. Each load replaces the held
//! entity; nothing is merged. A reload keeps the previous entity visible until
//! the new one arrives, so a view switching between ids can briefly show the
//! old movie under a loading indicator.

use crate::domain::Movie;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub entity: Option<Movie>,
    pub loading: bool,
    pub error: Option<String>,

    /// Id of the most recent load request.
    pub requested_id: Option<i64>,
}

impl DetailState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entity: None,
            loading: false,
            error: None,
            requested_id: None,
        }
    }

    pub fn begin_load(&mut self, id: i64) {
        self.loading = true;
        self.error = None;
        self.requested_id = Some(id);
    }

    pub fn apply(&mut self, movie: Movie) {
        tracing::debug!(movie_id = movie.id, "detail entity replaced");
        self.entity = Some(movie);
        self.loading = false;
    }

    /// Records a failed load. The previously held entity stays.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}
