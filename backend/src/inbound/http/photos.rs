//! Photo API handlers. Uploads land pending review; the update handler
//! doubles as the review and like endpoint.

use actix_web::{delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{Page, PageRequest};
use crate::inbound::http::{ApiResult, HttpState, MutationAck};
use crate::models::photo::{self, PhotoCreate, PhotoListQuery, PhotoUpdate};

/// Upload a photo (pending review).
#[utoipa::path(
    post,
    path = "/api/photos",
    request_body = PhotoCreate,
    responses((status = 200, description = "Created record envelope")),
    tags = ["photos"]
)]
#[post("/photos")]
pub async fn create_photo(
    state: web::Data<HttpState>,
    body: web::Json<PhotoCreate>,
) -> ApiResult<web::Json<Value>> {
    let created = state
        .store
        .create(photo::COLLECTION, body.into_inner().into_record())
        .await?;
    Ok(web::Json(created))
}

/// List photos; defaults to the approved photo wall.
#[utoipa::path(
    get,
    path = "/api/photos",
    params(PhotoListQuery),
    responses((status = 200, description = "One page of photos")),
    tags = ["photos"]
)]
#[get("/photos")]
pub async fn list_photos(
    state: web::Data<HttpState>,
    query: web::Query<PhotoListQuery>,
) -> ApiResult<web::Json<Page<Value>>> {
    let query = query.into_inner();
    let page = PageRequest::normalised(query.page, query.size, photo::DEFAULT_PAGE_SIZE);
    let result = state
        .store
        .list(photo::COLLECTION, Some(&query.filter()), page)
        .await?;
    Ok(web::Json(result))
}

/// Fetch one photo by identifier.
#[utoipa::path(
    get,
    path = "/api/photos/{id}",
    responses(
        (status = 200, description = "The photo record"),
        (status = 404, description = "No such photo")
    ),
    tags = ["photos"]
)]
#[get("/photos/{id}")]
pub async fn get_photo(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    let record = state.store.get_by_id(photo::COLLECTION, &id).await?;
    Ok(web::Json(record))
}

/// Review a photo or adjust its like counter.
#[utoipa::path(
    put,
    path = "/api/photos/{id}",
    request_body = PhotoUpdate,
    responses((status = 200, body = MutationAck)),
    tags = ["photos"]
)]
#[put("/photos/{id}")]
pub async fn update_photo(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Json<PhotoUpdate>,
) -> ApiResult<web::Json<MutationAck>> {
    let patch = body.into_inner().into_patch().into_map();
    state.store.update(photo::COLLECTION, &id, patch).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}

/// Delete a photo.
#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    responses((status = 200, body = MutationAck)),
    tags = ["photos"]
)]
#[delete("/photos/{id}")]
pub async fn delete_photo(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<MutationAck>> {
    state.store.delete(photo::COLLECTION, &id).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}
