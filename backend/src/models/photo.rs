//! User-generated photos: typed request shapes and collection policy.
//!
//! Photos enter the catalogue pending review (`status` 0) and surface in
//! public listings once approved (`status` 1).

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Patch, QueryFilter, now_rfc3339};

/// Remote collection holding photos. Singular in the backing database.
pub const COLLECTION: &str = "photo";

/// Default page size; photo walls page larger than catalogue lists.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Create payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoCreate {
    /// Owning theme identifier.
    pub theme_id: String,
    /// Cloud-storage URL of the photo.
    pub image_url: String,
}

impl PhotoCreate {
    /// Build the outbound record: uploads always start pending review with
    /// a zeroed like counter.
    pub fn into_record(self) -> Value {
        let now = now_rfc3339();
        json!({
            "theme_id": self.theme_id,
            "image_url": self.image_url,
            "status": 0,
            "like_count": 0,
            "created_at": now,
            "updated_at": now,
        })
    }
}

/// Partial-update payload used for review decisions and like counts.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PhotoUpdate {
    /// Review status: 0 pending, 1 approved, 2 rejected.
    pub status: Option<i64>,
    /// Like counter.
    pub like_count: Option<i64>,
}

impl PhotoUpdate {
    /// Fold supplied fields into a patch.
    pub fn into_patch(self) -> Patch {
        Patch::new()
            .set_if_present("status", self.status)
            .set_if_present("like_count", self.like_count)
    }
}

/// List query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PhotoListQuery {
    /// Narrow to one theme's photo wall.
    pub theme_id: Option<String>,
    /// Review status filter; defaults to approved (1).
    pub status: Option<i64>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Records per page.
    pub size: Option<u32>,
}

impl PhotoListQuery {
    /// Translate the query parameters into a remote filter.
    pub fn filter(&self) -> QueryFilter {
        let mut filter = QueryFilter::new().eq("status", self.status.unwrap_or(1));
        if let Some(theme_id) = &self.theme_id {
            filter = filter.eq("theme_id", theme_id.as_str());
        }
        filter
    }
}
