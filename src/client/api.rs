//! Catalog client contract and its HTTP implementation.
//!
//! [`CatalogClient`] is the stateless boundary between the stores and the remote
//! catalog service. It performs no retries; retry policy belongs to the caller.
//! Timeouts are enforced here, by the underlying [`reqwest::Client`].
//!
//! [`TmdbClient`] speaks the TMDb v3 REST API:
//!
//! | Operation        | Request                                        |
//! |------------------|------------------------------------------------|
//! | `fetch_catalog`  | `GET {base}/movie/popular?api_key=..&page=..`  |
//! | `search_catalog` | `GET {base}/search/movie?api_key=..&query=..`  |
//! | `fetch_genres`   | `GET {base}/genre/movie/list?api_key=..`       |
//! | `fetch_entity`   | `GET {base}/movie/{id}?api_key=..&language=..` |

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{Genre, Movie};
use crate::Config;

/// Errors from the catalog HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decoding).
    ///
    /// The request URL is stripped, since it carries the API key.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The catalog service returned a non-2xx status code.
    #[error("catalog API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The client could not be constructed from the given configuration.
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e.without_url())
    }
}

/// Remote catalog operations needed by the stores.
///
/// List-shaped results (`fetch_catalog`, `search_catalog`) carry `genre_ids` but
/// no named genres, runtime, budget, revenue, or companies. `fetch_entity`
/// returns the full record.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetches one page of the popular catalog. `None` lets the service pick its first page.
    async fn fetch_catalog(&self, page: Option<u32>) -> Result<Vec<Movie>, ClientError>;

    /// Fetches the genre taxonomy, without the "all" sentinel.
    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError>;

    /// Searches the remote catalog by free-text query.
    async fn search_catalog(&self, query: &str) -> Result<Vec<Movie>, ClientError>;

    /// Fetches a single movie with all detail fields.
    async fn fetch_entity(&self, id: i64) -> Result<Movie, ClientError>;
}

/// Paged list envelope used by the popular and search endpoints.
#[derive(Debug, Deserialize)]
struct PagedResponse {
    #[serde(default)]
    results: Vec<Movie>,
}

/// Envelope of the genre taxonomy endpoint.
#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

/// HTTP client for a TMDb-compatible catalog service.
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    /// Creates a client from process configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Setup`] if the base URL is empty or the HTTP client
    /// cannot be built.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Setup("base_url is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ---- private helpers ----

    /// Sends an authenticated GET and decodes a successful JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        tracing::debug!(path = %path, "catalog request");

        let response = self
            .client
            .get(self.url(path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Returns the response unchanged on a 2xx status, or an [`ClientError::Api`]
    /// carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "catalog API returned an error status");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CatalogClient for TmdbClient {
    async fn fetch_catalog(&self, page: Option<u32>) -> Result<Vec<Movie>, ClientError> {
        let query: Vec<(&str, String)> = page.map(|p| ("page", p.to_string())).into_iter().collect();
        let body: PagedResponse = self.get_json("/movie/popular", &query).await?;
        Ok(body.results)
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError> {
        let body: GenreListResponse = self.get_json("/genre/movie/list", &[]).await?;
        Ok(body.genres)
    }

    async fn search_catalog(&self, query: &str) -> Result<Vec<Movie>, ClientError> {
        let body: PagedResponse = self
            .get_json("/search/movie", &[("query", query.to_string())])
            .await?;
        Ok(body.results)
    }

    async fn fetch_entity(&self, id: i64) -> Result<Movie, ClientError> {
        self.get_json(&format!("/movie/{id}"), &[("language", self.language.clone())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const KEY: &str = "SUPERSECRETKEY";

    /// Serves one canned HTTP response and yields the request line it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (TmdbClient, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        let config = Config {
            base_url: format!("http://{addr}/3"),
            api_key: KEY.to_string(),
            language: "de-DE".to_string(),
            ..Config::default()
        };
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        (TmdbClient::with_client(http, &config), server)
    }

    #[test]
    fn rejects_empty_base_url() {
        let config = Config {
            base_url: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(TmdbClient::new(&config), Err(ClientError::Setup(_))));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let config = Config {
            base_url: "https://api.example.test/3/".to_string(),
            ..Config::default()
        };
        let client = TmdbClient::new(&config).unwrap();
        assert_eq!(client.url("/movie/popular"), "https://api.example.test/3/movie/popular");
    }

    #[test]
    fn paged_envelope_ignores_paging_fields() {
        let body: PagedResponse = serde_json::from_str(
            r#"{"page": 1, "total_pages": 40, "total_results": 800,
                "results": [{"id": 1, "title": "Dune", "genre_ids": [878]}]}"#,
        )
        .unwrap();
        assert_eq!(body.results.len(), 1);
        assert_eq!(body.results[0].genre_ids, vec![878]);
    }

    #[tokio::test]
    async fn catalog_request_sends_key_and_page() {
        let (client, server) =
            serve_once("200 OK", r#"{"page": 2, "results": [{"id": 7, "title": "Heat"}]}"#).await;

        let movies = client.fetch_catalog(Some(2)).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Heat");

        let line = server.await.unwrap();
        assert!(line.starts_with(&format!("GET /3/movie/popular?api_key={KEY}&page=2 ")), "{line}");
    }

    #[tokio::test]
    async fn catalog_request_without_page_omits_it() {
        let (client, server) = serve_once("200 OK", r#"{"results": []}"#).await;

        assert!(client.fetch_catalog(None).await.unwrap().is_empty());
        let line = server.await.unwrap();
        assert!(line.starts_with(&format!("GET /3/movie/popular?api_key={KEY} ")), "{line}");
    }

    #[tokio::test]
    async fn search_request_encodes_query() {
        let (client, server) = serve_once("200 OK", r#"{"results": []}"#).await;

        client.search_catalog("dune part").await.unwrap();
        let line = server.await.unwrap();
        assert!(
            line.starts_with(&format!("GET /3/search/movie?api_key={KEY}&query=dune+part ")),
            "{line}"
        );
    }

    #[tokio::test]
    async fn genre_request_decodes_taxonomy() {
        let (client, server) =
            serve_once("200 OK", r#"{"genres": [{"id": 28, "name": "Action"}]}"#).await;

        let genres = client.fetch_genres().await.unwrap();
        assert_eq!(
            genres,
            vec![Genre {
                id: 28,
                name: "Action".to_string()
            }]
        );
        let line = server.await.unwrap();
        assert!(line.starts_with(&format!("GET /3/genre/movie/list?api_key={KEY} ")), "{line}");
    }

    #[tokio::test]
    async fn entity_request_sends_language() {
        let (client, server) = serve_once("200 OK", r#"{"id": 42, "title": "Dune"}"#).await;

        let movie = client.fetch_entity(42).await.unwrap();
        assert_eq!(movie.id, 42);
        let line = server.await.unwrap();
        assert!(
            line.starts_with(&format!("GET /3/movie/42?api_key={KEY}&language=de-DE ")),
            "{line}"
        );
    }

    #[tokio::test]
    async fn error_status_maps_to_api_error() {
        let (client, server) = serve_once(
            "401 Unauthorized",
            r#"{"status_message": "Invalid API key"}"#,
        )
        .await;

        let err = client.fetch_genres().await.unwrap_err();
        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Invalid API key"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_a_request_error_without_the_key() {
        let (client, server) = serve_once("200 OK", "not json").await;

        let err = client.fetch_catalog(Some(1)).await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
        assert!(!err.to_string().contains(KEY), "{err}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn connection_failure_does_not_expose_the_key() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = Config {
            base_url: format!("http://{addr}"),
            api_key: KEY.to_string(),
            ..Config::default()
        };
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = TmdbClient::with_client(http, &config);

        let err = client.fetch_catalog(None).await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
        assert!(!err.to_string().contains(KEY), "{err}");
        assert!(!format!("{err:?}").contains(KEY), "{err:?}");
    }
}
