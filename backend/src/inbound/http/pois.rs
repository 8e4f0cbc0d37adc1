//! POI API handlers, including the location-aware listing.

use actix_web::{delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{Page, PageRequest, geo};
use crate::inbound::http::{ApiResult, HttpState, MutationAck};
use crate::models::poi::{self, PoiCreate, PoiListQuery, PoiUpdate};

/// Create a POI.
#[utoipa::path(
    post,
    path = "/api/pois",
    request_body = PoiCreate,
    responses((status = 200, description = "Created record envelope")),
    tags = ["pois"]
)]
#[post("/pois")]
pub async fn create_poi(
    state: web::Data<HttpState>,
    body: web::Json<PoiCreate>,
) -> ApiResult<web::Json<Value>> {
    let created = state
        .store
        .create(poi::COLLECTION, body.into_inner().into_record())
        .await?;
    Ok(web::Json(created))
}

/// List enabled POIs with optional region/type narrowing.
///
/// When the caller supplies `lat` and `lng`, every located record in the
/// page is annotated with `_distance` (metres, haversine). Records stored
/// with a (0, 0) coordinate have no known location and stay unannotated.
#[utoipa::path(
    get,
    path = "/api/pois",
    params(PoiListQuery),
    responses((status = 200, description = "One page of POIs")),
    tags = ["pois"]
)]
#[get("/pois")]
pub async fn list_pois(
    state: web::Data<HttpState>,
    query: web::Query<PoiListQuery>,
) -> ApiResult<web::Json<Page<Value>>> {
    let query = query.into_inner();
    let page = PageRequest::normalised(query.page, query.size, poi::DEFAULT_PAGE_SIZE);
    let mut result = state
        .store
        .list(poi::COLLECTION, Some(&query.filter()), page)
        .await?;

    if let Some((lat, lng)) = query.caller_position() {
        geo::enrich_with_distance(&mut result.records, lat, lng);
    }
    Ok(web::Json(result))
}

/// Fetch one POI by identifier.
#[utoipa::path(
    get,
    path = "/api/pois/{id}",
    responses(
        (status = 200, description = "The POI record"),
        (status = 404, description = "No such POI")
    ),
    tags = ["pois"]
)]
#[get("/pois/{id}")]
pub async fn get_poi(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    let record = state.store.get_by_id(poi::COLLECTION, &id).await?;
    Ok(web::Json(record))
}

/// Patch a POI; only supplied fields change.
#[utoipa::path(
    put,
    path = "/api/pois/{id}",
    request_body = PoiUpdate,
    responses((status = 200, body = MutationAck)),
    tags = ["pois"]
)]
#[put("/pois/{id}")]
pub async fn update_poi(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Json<PoiUpdate>,
) -> ApiResult<web::Json<MutationAck>> {
    let patch = body.into_inner().into_patch().into_map();
    state.store.update(poi::COLLECTION, &id, patch).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}

/// Delete a POI.
#[utoipa::path(
    delete,
    path = "/api/pois/{id}",
    responses((status = 200, body = MutationAck)),
    tags = ["pois"]
)]
#[delete("/pois/{id}")]
pub async fn delete_poi(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<MutationAck>> {
    state.store.delete(poi::COLLECTION, &id).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}
