//! Comment API handlers.

use actix_web::{delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{Page, PageRequest};
use crate::inbound::http::{ApiResult, HttpState, MutationAck};
use crate::models::comment::{self, CommentCreate, CommentListQuery, CommentUpdate};

/// Post a comment (pending review).
#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CommentCreate,
    responses((status = 200, description = "Created record envelope")),
    tags = ["comments"]
)]
#[post("/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    body: web::Json<CommentCreate>,
) -> ApiResult<web::Json<Value>> {
    let created = state
        .store
        .create(comment::COLLECTION, body.into_inner().into_record())
        .await?;
    Ok(web::Json(created))
}

/// List comments, defaulting to approved ones.
#[utoipa::path(
    get,
    path = "/api/comments",
    params(CommentListQuery),
    responses((status = 200, description = "One page of comments")),
    tags = ["comments"]
)]
#[get("/comments")]
pub async fn list_comments(
    state: web::Data<HttpState>,
    query: web::Query<CommentListQuery>,
) -> ApiResult<web::Json<Page<Value>>> {
    let query = query.into_inner();
    let page = PageRequest::normalised(query.page, query.size, comment::DEFAULT_PAGE_SIZE);
    let result = state
        .store
        .list(comment::COLLECTION, Some(&query.filter()), page)
        .await?;
    Ok(web::Json(result))
}

/// Fetch one comment by identifier.
#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    responses(
        (status = 200, description = "The comment record"),
        (status = 404, description = "No such comment")
    ),
    tags = ["comments"]
)]
#[get("/comments/{id}")]
pub async fn get_comment(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    let record = state.store.get_by_id(comment::COLLECTION, &id).await?;
    Ok(web::Json(record))
}

/// Review a comment or adjust its like counter.
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    request_body = CommentUpdate,
    responses((status = 200, body = MutationAck)),
    tags = ["comments"]
)]
#[put("/comments/{id}")]
pub async fn update_comment(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Json<CommentUpdate>,
) -> ApiResult<web::Json<MutationAck>> {
    let patch = body.into_inner().into_patch().into_map();
    state.store.update(comment::COLLECTION, &id, patch).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    responses((status = 200, body = MutationAck)),
    tags = ["comments"]
)]
#[delete("/comments/{id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<MutationAck>> {
    state.store.delete(comment::COLLECTION, &id).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}
