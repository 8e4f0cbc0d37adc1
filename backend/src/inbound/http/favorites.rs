//! Favorites API handlers.
//!
//! Unlike the catalogue resources, favorites route through the
//! [`FavoritesService`](crate::domain::FavoritesService) so creates pass
//! the idempotency guard. The type/id pair is addressable in the path for
//! status checks and deletion.

use actix_web::{delete, get, post, web};
use serde_json::Value;

use crate::domain::{DomainError, Page, ResourceType};
use crate::inbound::http::{ApiResult, HttpState, MutationAck};
use crate::models::favorite::{FavoriteCreateRequest, FavoriteListQuery, FavoriteStatus};

fn parse_resource_type(raw: &str) -> Result<ResourceType, DomainError> {
    raw.parse::<ResourceType>().map_err(DomainError::from)
}

/// Favorite a resource. Duplicate pairs are rejected with a stable
/// `already_favorited` code.
#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = FavoriteCreateRequest,
    responses(
        (status = 200, description = "Created record envelope"),
        (status = 400, description = "Invalid resource type or already favorited")
    ),
    tags = ["favorites"]
)]
#[post("/favorites")]
pub async fn create_favorite(
    state: web::Data<HttpState>,
    body: web::Json<FavoriteCreateRequest>,
) -> ApiResult<web::Json<Value>> {
    let body = body.into_inner();
    let resource_type = parse_resource_type(&body.resource_type)?;
    let created = state
        .favorites
        .create(resource_type, &body.resource_id)
        .await?;
    Ok(web::Json(created))
}

/// List favorites, newest first.
#[utoipa::path(
    get,
    path = "/api/favorites",
    params(FavoriteListQuery),
    responses((status = 200, description = "One page of favorites")),
    tags = ["favorites"]
)]
#[get("/favorites")]
pub async fn list_favorites(
    state: web::Data<HttpState>,
    query: web::Query<FavoriteListQuery>,
) -> ApiResult<web::Json<Page<Value>>> {
    let query = query.into_inner();
    let resource_type = query
        .resource_type
        .as_deref()
        .map(parse_resource_type)
        .transpose()?;
    let result = state
        .favorites
        .list(resource_type, query.page, query.size)
        .await?;
    Ok(web::Json(result))
}

/// Check whether a resource is favorited.
#[utoipa::path(
    get,
    path = "/api/favorites/{resource_type}/{resource_id}",
    responses((status = 200, body = FavoriteStatus)),
    tags = ["favorites"]
)]
#[get("/favorites/{resource_type}/{resource_id}")]
pub async fn check_favorite_status(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<FavoriteStatus>> {
    let (raw_type, resource_id) = path.into_inner();
    let resource_type = parse_resource_type(&raw_type)?;
    let favorited = state
        .favorites
        .check_status(resource_type, &resource_id)
        .await?;
    Ok(web::Json(FavoriteStatus { favorited }))
}

/// Unfavorite a resource by its type/id pair.
#[utoipa::path(
    delete,
    path = "/api/favorites/{resource_type}/{resource_id}",
    responses(
        (status = 200, body = MutationAck),
        (status = 404, description = "Nothing to unfavorite")
    ),
    tags = ["favorites"]
)]
#[delete("/favorites/{resource_type}/{resource_id}")]
pub async fn delete_favorite(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<MutationAck>> {
    let (raw_type, resource_id) = path.into_inner();
    let resource_type = parse_resource_type(&raw_type)?;
    state.favorites.delete(resource_type, &resource_id).await?;
    Ok(web::Json(MutationAck::plain()))
}
