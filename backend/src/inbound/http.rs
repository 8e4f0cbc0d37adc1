//! Inbound REST adapter.
//!
//! One module per resource, each exposing the standard five handlers
//! (create, list, detail, update, delete) plus the favorites extras. All
//! handlers are thin: bind, translate, call the domain, map errors.

use serde::Serialize;
use utoipa::ToSchema;

pub mod comments;
pub mod error;
pub mod favorites;
pub mod photos;
pub mod pois;
pub mod products;
pub mod regions;
pub mod state;
pub mod themes;

#[cfg(test)]
mod test_store;

pub use error::ApiResult;
pub use state::HttpState;

/// Acknowledgement returned by update and delete handlers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MutationAck {
    /// Always true; failures surface as error envelopes instead.
    pub success: bool,
    /// Identifier the mutation targeted, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl MutationAck {
    /// Acknowledge a mutation on a specific record.
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: Some(id.into()),
        }
    }

    /// Acknowledge a mutation with no single target record.
    pub fn plain() -> Self {
        Self {
            success: true,
            id: None,
        }
    }
}

/// Register every resource route under the caller's scope.
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(regions::create_region)
        .service(regions::list_regions)
        .service(regions::get_region)
        .service(regions::update_region)
        .service(regions::delete_region)
        .service(pois::create_poi)
        .service(pois::list_pois)
        .service(pois::get_poi)
        .service(pois::update_poi)
        .service(pois::delete_poi)
        .service(themes::create_theme)
        .service(themes::list_themes)
        .service(themes::get_theme)
        .service(themes::update_theme)
        .service(themes::delete_theme)
        .service(photos::create_photo)
        .service(photos::list_photos)
        .service(photos::get_photo)
        .service(photos::update_photo)
        .service(photos::delete_photo)
        .service(comments::create_comment)
        .service(comments::list_comments)
        .service(comments::get_comment)
        .service(comments::update_comment)
        .service(comments::delete_comment)
        .service(products::create_product)
        .service(products::list_products)
        .service(products::get_product)
        .service(products::update_product)
        .service(products::delete_product)
        .service(favorites::create_favorite)
        .service(favorites::list_favorites)
        .service(favorites::check_favorite_status)
        .service(favorites::delete_favorite);
}
