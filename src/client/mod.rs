//! Remote catalog access.
//!
//! The stores describe remote work as [`ClientRequest`] values; this module
//! executes them against a [`CatalogClient`] and reports [`ClientResponse`]s.
//!
//! # Architecture
//!
//! - `api`: the [`CatalogClient`] contract and the HTTP implementation
//! - `messages`: request/response protocol types
//! - `handler`: request execution and error-to-message conversion

pub mod api;
pub mod handler;
pub mod messages;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{CatalogClient, ClientError, TmdbClient};
pub use handler::execute;
pub use messages::{ClientRequest, ClientResponse, RequestKind, SearchOrigin};
