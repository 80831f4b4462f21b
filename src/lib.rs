//! Reelscope: a movie catalog browser core.
//!
//! Reelscope fetches a popular-movie catalog from a TMDb-compatible service and
//! maintains the state a catalog browser needs:
//! - Local-first search with a remote fallback and a recent-search history
//! - Genre filtering against a lazily loaded taxonomy
//! - Client-side pagination over the current view
//! - A single-movie detail view
//! - Optimistic, client-only movie inserts

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Coordinator (coordinator.rs)                       │  ← Single writer
//! │  - Spawns fetch tasks                               │
//! │  - Publishes snapshots                              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Catalog store, detail store, recent searches     │
//! │  - Event handling and view model computation        │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ Client Layer  │
//! │ (ui/)         │                       │ (client/)     │
//! │ - View models │                       │ - HTTP API    │
//! │ - Rendering   │                       │ - Messages    │
//! └───────────────┘                       └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Movie, Genre, GenreFilter, MovieDraft            │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Stores with the event/action model
//! - [`client`]: Catalog client contract, HTTP implementation, request executor
//! - [`coordinator`]: Runtime owner of the stores
//! - [`domain`]: Core domain types and errors
//! - [`ui`]: View models and text rendering
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Configuration comes from a TOML file, from `REELSCOPE_*` environment
//! variables, or from a string map:
//!
//! ```toml
//! base_url = "https://api.themoviedb.org/3"
//! image_base_url = "https://image.tmdb.org/t/p"
//! api_key = "..."
//! language = "en-US"
//! catalog_pages = 2
//! request_timeout_secs = 10
//! trace_level = "debug"
//! log_file = "/var/log/reelscope.log"
//! ```
//!
//! # Example
//!
//! ```rust
//! use reelscope::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(1, "https://image.tmdb.org/t/p");
//! let (_changed, actions) = handle_event(&mut state, &Event::LoadCatalog)?;
//! // Execute the fetch actions, then feed Event::ClientResponse back in...
//! # let _ = actions;
//! # Ok::<(), reelscope::CatalogError>(())
//! ```

pub mod app;
pub mod client;
pub mod coordinator;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use coordinator::{Coordinator, Snapshot};
pub use domain::{CatalogError, Genre, GenreFilter, Movie, MovieDraft, Result};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Prefix of the environment variables read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "REELSCOPE_";

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_CATALOG_PAGES: u32 = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Process-wide configuration, supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Versioned API root. Default: `https://api.themoviedb.org/3`
    pub base_url: String,

    /// Image CDN root, without size segment. Default: `https://image.tmdb.org/t/p`
    pub image_base_url: String,

    /// API key sent with every request. Default: empty
    pub api_key: String,

    /// Language requested for detail fetches. Default: `en-US`
    pub language: String,

    /// Popular-catalog pages fetched per catalog load. Default: 1
    pub catalog_pages: u32,

    /// Per-request timeout enforced by the HTTP client. Default: 10
    pub request_timeout_secs: u64,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// JSON log file, rotated by size. Default: none
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_key: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            catalog_pages: DEFAULT_CATALOG_PAGES,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map with fallback defaults.
    ///
    /// Unknown keys are ignored. Values that fail to parse, and empty strings,
    /// fall back to the default for that key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use reelscope::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "secret".to_string());
    /// map.insert("catalog_pages".to_string(), "3".to_string());
    /// map.insert("request_timeout_secs".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_key, "secret");
    /// assert_eq!(config.catalog_pages, 3);
    /// assert_eq!(config.request_timeout_secs, 10);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let catalog_pages = text("catalog_pages")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&pages| pages > 0)
            .unwrap_or(defaults.catalog_pages);

        let request_timeout_secs = text("request_timeout_secs")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.request_timeout_secs);

        Self {
            base_url: text("base_url").unwrap_or(defaults.base_url),
            image_base_url: text("image_base_url").unwrap_or(defaults.image_base_url),
            api_key: text("api_key").unwrap_or(defaults.api_key),
            language: text("language").unwrap_or(defaults.language),
            catalog_pages,
            request_timeout_secs,
            trace_level: text("trace_level"),
            log_file: text("log_file").map(PathBuf::from),
        }
    }

    /// Reads configuration from `REELSCOPE_*` environment variables.
    ///
    /// `REELSCOPE_API_KEY` maps to `api_key`, and so on for every field.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let map: BTreeMap<String, String> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|field| (field.to_ascii_lowercase(), value))
            })
            .collect();
        Self::from_map(&map)
    }

    /// Loads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Config`] if it is not valid TOML for this structure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| CatalogError::Config(format!("{}: {e}", path.display())))?;

        if config.catalog_pages == 0 {
            return Err(CatalogError::Config(format!(
                "{}: catalog_pages must be at least 1",
                path.display()
            )));
        }
        Ok(config)
    }
}

/// Sets up logging and builds a coordinator from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
///
/// # Example
///
/// ```rust,no_run
/// use reelscope::{initialize, Config};
///
/// # async fn run() -> reelscope::Result<()> {
/// let mut coordinator = initialize(&Config::from_env())?;
/// coordinator.load_catalog()?;
/// coordinator.settle().await?;
/// # Ok(())
/// # }
/// ```
pub fn initialize(config: &Config) -> Result<Coordinator> {
    observability::init_tracing(config);
    tracing::debug!(
        base_url = %config.base_url,
        catalog_pages = config.catalog_pages,
        "initializing reelscope"
    );
    Coordinator::from_config(config)
}
