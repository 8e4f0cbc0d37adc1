//! Region API handlers.

use actix_web::{delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{Page, PageRequest};
use crate::inbound::http::{ApiResult, HttpState, MutationAck};
use crate::models::region::{self, RegionCreate, RegionListQuery, RegionUpdate};

/// Create a region.
#[utoipa::path(
    post,
    path = "/api/regions",
    request_body = RegionCreate,
    responses(
        (status = 200, description = "Created record envelope"),
        (status = 500, description = "Remote service failure")
    ),
    tags = ["regions"]
)]
#[post("/regions")]
pub async fn create_region(
    state: web::Data<HttpState>,
    body: web::Json<RegionCreate>,
) -> ApiResult<web::Json<Value>> {
    let created = state
        .store
        .create(region::COLLECTION, body.into_inner().into_record())
        .await?;
    Ok(web::Json(created))
}

/// List regions, filtered by status.
#[utoipa::path(
    get,
    path = "/api/regions",
    params(RegionListQuery),
    responses((status = 200, description = "One page of regions")),
    tags = ["regions"]
)]
#[get("/regions")]
pub async fn list_regions(
    state: web::Data<HttpState>,
    query: web::Query<RegionListQuery>,
) -> ApiResult<web::Json<Page<Value>>> {
    let query = query.into_inner();
    let page = PageRequest::normalised(query.page, query.size, region::DEFAULT_PAGE_SIZE);
    let result = state
        .store
        .list(region::COLLECTION, Some(&query.filter()), page)
        .await?;
    Ok(web::Json(result))
}

/// Fetch one region by identifier.
#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    responses(
        (status = 200, description = "The region record"),
        (status = 404, description = "No such region")
    ),
    tags = ["regions"]
)]
#[get("/regions/{id}")]
pub async fn get_region(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    let record = state.store.get_by_id(region::COLLECTION, &id).await?;
    Ok(web::Json(record))
}

/// Patch a region; only supplied fields change.
#[utoipa::path(
    put,
    path = "/api/regions/{id}",
    request_body = RegionUpdate,
    responses((status = 200, body = MutationAck)),
    tags = ["regions"]
)]
#[put("/regions/{id}")]
pub async fn update_region(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Json<RegionUpdate>,
) -> ApiResult<web::Json<MutationAck>> {
    let patch = body.into_inner().into_patch().into_map();
    state.store.update(region::COLLECTION, &id, patch).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}

/// Delete a region.
#[utoipa::path(
    delete,
    path = "/api/regions/{id}",
    responses((status = 200, body = MutationAck)),
    tags = ["regions"]
)]
#[delete("/regions/{id}")]
pub async fn delete_region(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<MutationAck>> {
    state.store.delete(region::COLLECTION, &id).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}
