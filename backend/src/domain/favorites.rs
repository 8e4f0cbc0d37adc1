//! Idempotency-guarded favorites service.
//!
//! The remote document store enforces no uniqueness constraint, so a
//! favorite for a given (resource_type, resource_id) pair is kept unique by
//! this service: creates for the same key are serialised behind a per-key
//! async lock, and the check-then-insert sequence runs entirely inside the
//! critical section. Two overlapping creates therefore cannot both observe
//! "absent" and both insert.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;

use super::error::DomainError;
use super::page::{Page, PageRequest};
use super::patch::now_rfc3339;
use super::ports::DocumentStore;
use super::query::QueryFilter;

/// Collection holding favorite records.
pub const COLLECTION_FAVORITES: &str = "favorites";

/// Default page size for favorite listings.
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Kind of resource a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// A themed photo gallery.
    Theme,
    /// A point of interest.
    Poi,
    /// A referral product.
    Product,
}

impl ResourceType {
    /// Wire representation stored in the `resource_type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Poi => "poi",
            Self::Product => "product",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection for resource types outside the fixed enumeration. Raised
/// before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("resource_type must be one of: theme, poi, product")]
pub struct InvalidResourceType;

impl FromStr for ResourceType {
    type Err = InvalidResourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "theme" => Ok(Self::Theme),
            "poi" => Ok(Self::Poi),
            "product" => Ok(Self::Product),
            _ => Err(InvalidResourceType),
        }
    }
}

impl From<InvalidResourceType> for DomainError {
    fn from(err: InvalidResourceType) -> Self {
        Self::invalid_request(err.to_string())
    }
}

type FavoriteKey = (ResourceType, String);

/// Favorites use-cases over the document-store port.
pub struct FavoritesService {
    store: Arc<dyn DocumentStore>,
    create_locks: StdMutex<HashMap<FavoriteKey, Arc<AsyncMutex<()>>>>,
}

impl FavoritesService {
    /// Build the service over a store implementation.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            create_locks: StdMutex::new(HashMap::new()),
        }
    }

    fn key_filter(resource_type: ResourceType, resource_id: &str) -> QueryFilter {
        QueryFilter::new()
            .eq("resource_type", resource_type.as_str())
            .eq("resource_id", resource_id)
    }

    /// Lock entries live for the process lifetime; the key space is bounded
    /// by the favorite catalogue, so no eviction is implemented.
    fn lock_for(&self, key: FavoriteKey) -> Arc<AsyncMutex<()>> {
        let mut locks = self
            .create_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(key).or_default())
    }

    async fn find_existing(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
    ) -> Result<Option<Value>, DomainError> {
        let filter = Self::key_filter(resource_type, resource_id);
        let page = self
            .store
            .list(COLLECTION_FAVORITES, Some(&filter), PageRequest::single())
            .await?;
        Ok(page.records.into_iter().next())
    }

    /// Record a favorite, rejecting duplicates for the same
    /// (resource_type, resource_id) pair.
    ///
    /// # Errors
    ///
    /// [`DomainError`] with code `already_favorited` when the pair already
    /// exists, or whatever the store surfaces.
    pub async fn create(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
    ) -> Result<Value, DomainError> {
        let lock = self.lock_for((resource_type, resource_id.to_owned()));
        let _guard = lock.lock().await;

        if self.find_existing(resource_type, resource_id).await?.is_some() {
            return Err(DomainError::already_favorited("already favorited"));
        }

        // The creator identity is injected by the remote service from the
        // bearer token; the gateway never sets it.
        let now = now_rfc3339();
        let record = json!({
            "resource_type": resource_type.as_str(),
            "resource_id": resource_id,
            "created_at": now,
            "updated_at": now,
        });

        debug!(%resource_type, resource_id, "creating favorite");
        Ok(self.store.create(COLLECTION_FAVORITES, record).await?)
    }

    /// Remove the favorite for the pair, failing with `not_found` when no
    /// matching record exists.
    pub async fn delete(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
    ) -> Result<(), DomainError> {
        let existing = self
            .find_existing(resource_type, resource_id)
            .await?
            .ok_or_else(|| DomainError::not_found("favorite not found"))?;

        let id = existing
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::internal("favorite record is missing its identifier"))?;

        Ok(self.store.delete(COLLECTION_FAVORITES, id).await?)
    }

    /// Whether the pair is currently favorited.
    pub async fn check_status(
        &self,
        resource_type: ResourceType,
        resource_id: &str,
    ) -> Result<bool, DomainError> {
        Ok(self
            .find_existing(resource_type, resource_id)
            .await?
            .is_some())
    }

    /// Page through favorites, optionally narrowed to one resource type,
    /// newest first.
    pub async fn list(
        &self,
        resource_type: Option<ResourceType>,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<Page<Value>, DomainError> {
        let mut filter = QueryFilter::new();
        if let Some(resource_type) = resource_type {
            filter = filter.eq("resource_type", resource_type.as_str());
        }
        filter = filter.order_desc("created_at");

        let page = PageRequest::normalised(page, size, DEFAULT_PAGE_SIZE);
        Ok(self
            .store
            .list(COLLECTION_FAVORITES, Some(&filter), page)
            .await?)
    }
}
