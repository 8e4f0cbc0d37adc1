//! Domain ports defining the edges of the hexagon.
//!
//! The single driven port here is [`DocumentStore`]: the uniform CRUD
//! surface the gateway expects from the remote document service. Adapters
//! map their failures into the typed [`StoreError`] variants instead of
//! returning `anyhow::Result`.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use super::page::{Page, PageRequest};
use super::query::QueryFilter;

/// Errors surfaced by the document-store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The remote service answered outside the 2xx range. The raw response
    /// body is preserved for diagnostics.
    #[error("remote API error [{status}]: {body}")]
    RemoteApi {
        /// HTTP status returned by the remote service.
        status: u16,
        /// Raw response body as received.
        body: String,
    },
    /// Serialisation, connection, or response-read failure.
    #[error("transport failure: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },
    /// A 2xx response whose body does not match the expected envelope.
    #[error("malformed remote response: {message}")]
    MalformedResponse {
        /// Description of the shape mismatch.
        message: String,
    },
    /// An identifier-scoped operation matched no record.
    #[error("no record {id} in collection {collection}")]
    NotFound {
        /// Collection that was queried.
        collection: String,
        /// Identifier that matched nothing.
        id: String,
    },
}

impl StoreError {
    /// Helper for transport-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for envelope-shape failures.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Helper for missing records.
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

/// Uniform CRUD port over the remote document service.
///
/// `get_by_id` is a degenerate `list` (page 1, size 1, filtered on `_id`):
/// the remote protocol exposes no single-record fetch verb, so any
/// implementation must preserve that translation rather than invent an
/// endpoint.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `record` into `collection`, returning the remote response
    /// envelope (which carries the assigned identifier).
    async fn create(&self, collection: &str, record: Value) -> Result<Value, StoreError>;

    /// List records matching `filter` (`None` or an empty filter means
    /// "match all") with normalised pagination.
    async fn list(
        &self,
        collection: &str,
        filter: Option<&QueryFilter>,
        page: PageRequest,
    ) -> Result<Page<Value>, StoreError>;

    /// Fetch a single record by identifier.
    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value, StoreError>;

    /// Apply a field-level patch to the record with the given identifier.
    /// The adapter transmits the patch verbatim; whitelisting happens in
    /// the caller.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<(), StoreError>;

    /// Delete the record with the given identifier.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
