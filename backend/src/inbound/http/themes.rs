//! Theme API handlers.

use actix_web::{delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{Page, PageRequest};
use crate::inbound::http::{ApiResult, HttpState, MutationAck};
use crate::models::theme::{self, ThemeCreate, ThemeListQuery, ThemeUpdate};

/// Create a theme.
#[utoipa::path(
    post,
    path = "/api/themes",
    request_body = ThemeCreate,
    responses((status = 200, description = "Created record envelope")),
    tags = ["themes"]
)]
#[post("/themes")]
pub async fn create_theme(
    state: web::Data<HttpState>,
    body: web::Json<ThemeCreate>,
) -> ApiResult<web::Json<Value>> {
    let created = state
        .store
        .create(theme::COLLECTION, body.into_inner().into_record())
        .await?;
    Ok(web::Json(created))
}

/// List enabled themes, optionally narrowed to a region.
#[utoipa::path(
    get,
    path = "/api/themes",
    params(ThemeListQuery),
    responses((status = 200, description = "One page of themes")),
    tags = ["themes"]
)]
#[get("/themes")]
pub async fn list_themes(
    state: web::Data<HttpState>,
    query: web::Query<ThemeListQuery>,
) -> ApiResult<web::Json<Page<Value>>> {
    let query = query.into_inner();
    let page = PageRequest::normalised(query.page, query.size, theme::DEFAULT_PAGE_SIZE);
    let result = state
        .store
        .list(theme::COLLECTION, Some(&query.filter()), page)
        .await?;
    Ok(web::Json(result))
}

/// Fetch one theme by identifier.
#[utoipa::path(
    get,
    path = "/api/themes/{id}",
    responses(
        (status = 200, description = "The theme record"),
        (status = 404, description = "No such theme")
    ),
    tags = ["themes"]
)]
#[get("/themes/{id}")]
pub async fn get_theme(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    let record = state.store.get_by_id(theme::COLLECTION, &id).await?;
    Ok(web::Json(record))
}

/// Patch a theme; only supplied fields change.
#[utoipa::path(
    put,
    path = "/api/themes/{id}",
    request_body = ThemeUpdate,
    responses((status = 200, body = MutationAck)),
    tags = ["themes"]
)]
#[put("/themes/{id}")]
pub async fn update_theme(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Json<ThemeUpdate>,
) -> ApiResult<web::Json<MutationAck>> {
    let patch = body.into_inner().into_patch().into_map();
    state.store.update(theme::COLLECTION, &id, patch).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}

/// Delete a theme.
#[utoipa::path(
    delete,
    path = "/api/themes/{id}",
    responses((status = 200, body = MutationAck)),
    tags = ["themes"]
)]
#[delete("/themes/{id}")]
pub async fn delete_theme(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<MutationAck>> {
    state.store.delete(theme::COLLECTION, &id).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}
