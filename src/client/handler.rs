//! Executes [`ClientRequest`]s against a [`CatalogClient`].
//!
//! This is the only place where the stores' remote work actually awaits I/O. Every
//! outcome, success or failure, is turned into a [`ClientResponse`]; errors become
//! display strings here so nothing propagates past the store boundary.

use crate::client::api::{CatalogClient, ClientError};
use crate::client::messages::{ClientRequest, ClientResponse, RequestKind};
use crate::domain::Movie;

/// Runs one request to completion and returns its response.
pub async fn execute(client: &dyn CatalogClient, request: ClientRequest) -> ClientResponse {
    let kind = request.kind();

    match request {
        ClientRequest::LoadCatalog { pages } => handle_result(
            "Failed to fetch movies",
            kind,
            load_pages(client, pages).await,
            |movies| {
                tracing::debug!(movie_count = movies.len(), pages = pages, "catalog fetched");
                ClientResponse::CatalogLoaded { movies }
            },
        ),

        ClientRequest::LoadGenres => handle_result(
            "Failed to fetch genres",
            kind,
            client.fetch_genres().await,
            |genres| {
                tracing::debug!(genre_count = genres.len(), "genres fetched");
                ClientResponse::GenresLoaded { genres }
            },
        ),

        ClientRequest::Search { query, origin } => {
            let result = client.search_catalog(&query).await;
            handle_result("Failed to fetch movies from API", kind, result, |movies| {
                tracing::debug!(query = %query, result_count = movies.len(), "remote search finished");
                ClientResponse::SearchResolved {
                    query,
                    origin,
                    movies,
                }
            })
        }

        ClientRequest::LoadEntity { id } => handle_result(
            "Failed to fetch movie details",
            kind,
            client.fetch_entity(id).await,
            |movie| {
                tracing::debug!(movie_id = id, "movie details fetched");
                ClientResponse::EntityLoaded { movie }
            },
        ),
    }
}

/// Fetches popular pages `1..=pages` sequentially and concatenates them.
///
/// Fails as a whole if any page fails; partial results are discarded.
async fn load_pages(client: &dyn CatalogClient, pages: u32) -> Result<Vec<Movie>, ClientError> {
    if pages <= 1 {
        return client.fetch_catalog(None).await;
    }

    let mut movies = Vec::new();
    for page in 1..=pages {
        movies.extend(client.fetch_catalog(Some(page)).await?);
    }
    Ok(movies)
}

/// Standardizes error conversion and logging across all request kinds.
fn handle_result<T, F>(
    context: &str,
    request: RequestKind,
    result: Result<T, ClientError>,
    on_success: F,
) -> ClientResponse
where
    F: FnOnce(T) -> ClientResponse,
{
    match result {
        Ok(value) => on_success(value),
        Err(e) => {
            tracing::warn!(request = ?request, error = %e, "catalog request failed");
            ClientResponse::Error {
                request,
                message: format!("{context}: {e}"),
            }
        }
    }
}
