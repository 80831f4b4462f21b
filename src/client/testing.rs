//! In-memory [`CatalogClient`] double for tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::client::api::{CatalogClient, ClientError};
use crate::domain::{Genre, Movie};

/// Number of calls made per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub catalog: usize,
    pub genres: usize,
    pub search: usize,
    pub entity: usize,
}

/// Scripted catalog. Unknown searches return an empty list; unknown ids fail with 404.
#[derive(Default)]
pub struct FakeCatalog {
    pages: HashMap<u32, Vec<Movie>>,
    scripted_catalog: Mutex<VecDeque<(Duration, Vec<Movie>)>>,
    genres: Vec<Genre>,
    searches: HashMap<String, Vec<Movie>>,
    entities: HashMap<i64, Movie>,
    failing: bool,
    calls: Mutex<CallCounts>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, movies: Vec<Movie>) -> Self {
        self.pages.insert(page, movies);
        self
    }

    /// Queues a catalog response that completes after `delay`. Queued responses
    /// are consumed before the page map is consulted.
    pub fn with_delayed_catalog(self, delay: Duration, movies: Vec<Movie>) -> Self {
        self.scripted_catalog
            .lock()
            .unwrap()
            .push_back((delay, movies));
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_search(mut self, query: &str, movies: Vec<Movie>) -> Self {
        self.searches.insert(query.to_string(), movies);
        self
    }

    pub fn with_entity(mut self, movie: Movie) -> Self {
        self.entities.insert(movie.id, movie);
        self
    }

    /// Makes every operation fail with a 500.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn calls(&self) -> CallCounts {
        *self.calls.lock().unwrap()
    }

    fn record(&self, bump: impl FnOnce(&mut CallCounts)) -> Result<(), ClientError> {
        bump(&mut self.calls.lock().unwrap());
        if self.failing {
            return Err(ClientError::Api {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn fetch_catalog(&self, page: Option<u32>) -> Result<Vec<Movie>, ClientError> {
        self.record(|c| c.catalog += 1)?;
        let scripted = self.scripted_catalog.lock().unwrap().pop_front();
        if let Some((delay, movies)) = scripted {
            tokio::time::sleep(delay).await;
            return Ok(movies);
        }
        Ok(self.pages.get(&page.unwrap_or(1)).cloned().unwrap_or_default())
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError> {
        self.record(|c| c.genres += 1)?;
        Ok(self.genres.clone())
    }

    async fn search_catalog(&self, query: &str) -> Result<Vec<Movie>, ClientError> {
        self.record(|c| c.search += 1)?;
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn fetch_entity(&self, id: i64) -> Result<Movie, ClientError> {
        self.record(|c| c.entity += 1)?;
        self.entities.get(&id).cloned().ok_or_else(|| ClientError::Api {
            status: 404,
            body: format!("movie {id} not found"),
        })
    }
}
