//! Favorites: request shapes for the idempotency-guarded service.
//!
//! `resource_type` is bound as a plain string and parsed by the handler so
//! an invalid value surfaces as the gateway's own error envelope rather
//! than the framework's deserialisation message.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Create payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCreateRequest {
    /// One of `theme`, `poi`, `product`.
    pub resource_type: String,
    /// Identifier of the favorited resource.
    pub resource_id: String,
}

/// List query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct FavoriteListQuery {
    /// Optional narrowing to one resource type.
    pub resource_type: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Records per page.
    pub size: Option<u32>,
}

/// Status-check response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteStatus {
    /// Whether a favorite exists for the pair.
    pub favorited: bool,
}
