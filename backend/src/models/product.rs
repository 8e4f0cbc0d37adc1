//! Referral products: typed request shapes and collection policy.
//!
//! Products are display-and-jump only; there is no payment flow, a record
//! just carries the target mini-program coordinates.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Patch, QueryFilter, now_rfc3339};

/// Remote collection holding products. Singular in the backing database.
pub const COLLECTION: &str = "product";

/// Default page size for product listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Create payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreate {
    /// Display name.
    pub name: String,
    /// Product image URL.
    #[serde(default)]
    pub image: String,
    /// Display price; negative values are clamped to zero.
    #[serde(default)]
    pub price: f64,
    /// Target mini-program application id.
    #[serde(default)]
    pub jump_app_id: String,
    /// Target path inside the mini-program.
    #[serde(default)]
    pub jump_path: String,
}

impl ProductCreate {
    /// Build the outbound record with audit timestamps stamped.
    pub fn into_record(self) -> Value {
        let now = now_rfc3339();
        json!({
            "name": self.name,
            "image": self.image,
            "price": self.price.max(0.0),
            "jump_app_id": self.jump_app_id,
            "jump_path": self.jump_path,
            "created_at": now,
            "updated_at": now,
        })
    }
}

/// Partial-update payload: only supplied fields are patched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductUpdate {
    /// Display name.
    pub name: Option<String>,
    /// Product image URL.
    pub image: Option<String>,
    /// Display price.
    pub price: Option<f64>,
    /// Target mini-program application id.
    pub jump_app_id: Option<String>,
    /// Target path inside the mini-program.
    pub jump_path: Option<String>,
}

impl ProductUpdate {
    /// Fold supplied fields into a patch.
    pub fn into_patch(self) -> Patch {
        Patch::new()
            .set_if_present("name", self.name)
            .set_if_present("image", self.image)
            .set_if_present("price", self.price)
            .set_if_present("jump_app_id", self.jump_app_id)
            .set_if_present("jump_path", self.jump_path)
    }
}

/// List query parameters: products are a plain paged list.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductListQuery {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Records per page.
    pub size: Option<u32>,
}

impl ProductListQuery {
    /// Products carry no status field, so the filter is empty (match all).
    pub fn filter(&self) -> QueryFilter {
        QueryFilter::new()
    }
}
