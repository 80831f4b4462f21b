//! Error types for the catalog core.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Client failures never escape the stores: they are converted into the `error`
//! string of the owning state. `CatalogError` surfaces only at the edges (config
//! loading, filter parsing, coordinator plumbing).

use thiserror::Error;

use crate::client::ClientError;

/// The main error type for catalog operations.
///
/// # Examples
///
/// ```
/// use reelscope::CatalogError;
///
/// fn parse_filter() -> Result<(), CatalogError> {
///     Err(CatalogError::Validation("genre id must be numeric".to_string()))
/// }
/// assert!(parse_filter().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A call to the remote catalog failed (network, HTTP status, or decoding).
    #[error("Remote error: {0}")]
    Remote(#[from] ClientError),

    /// User-supplied data could not be interpreted.
    ///
    /// Raised for malformed genre filter values. Add-movie drafts are not
    /// validated; their numeric fields fall back to zero instead.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A spawned fetch task panicked or was aborted before reporting back.
    #[error("Coordinator error: {0}")]
    Coordinator(String),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
