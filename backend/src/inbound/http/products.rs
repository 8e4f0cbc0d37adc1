//! Product API handlers.

use actix_web::{delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{Page, PageRequest};
use crate::inbound::http::{ApiResult, HttpState, MutationAck};
use crate::models::product::{self, ProductCreate, ProductListQuery, ProductUpdate};

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductCreate,
    responses((status = 200, description = "Created record envelope")),
    tags = ["products"]
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    body: web::Json<ProductCreate>,
) -> ApiResult<web::Json<Value>> {
    let created = state
        .store
        .create(product::COLLECTION, body.into_inner().into_record())
        .await?;
    Ok(web::Json(created))
}

/// List products.
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListQuery),
    responses((status = 200, description = "One page of products")),
    tags = ["products"]
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    query: web::Query<ProductListQuery>,
) -> ApiResult<web::Json<Page<Value>>> {
    let query = query.into_inner();
    let page = PageRequest::normalised(query.page, query.size, product::DEFAULT_PAGE_SIZE);
    let filter = query.filter();
    let result = state
        .store
        .list(product::COLLECTION, Some(&filter), page)
        .await?;
    Ok(web::Json(result))
}

/// Fetch one product by identifier.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    responses(
        (status = 200, description = "The product record"),
        (status = 404, description = "No such product")
    ),
    tags = ["products"]
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Value>> {
    let record = state.store.get_by_id(product::COLLECTION, &id).await?;
    Ok(web::Json(record))
}

/// Patch a product; only supplied fields change.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    request_body = ProductUpdate,
    responses((status = 200, body = MutationAck)),
    tags = ["products"]
)]
#[put("/products/{id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Json<ProductUpdate>,
) -> ApiResult<web::Json<MutationAck>> {
    let patch = body.into_inner().into_patch().into_map();
    state.store.update(product::COLLECTION, &id, patch).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    responses((status = 200, body = MutationAck)),
    tags = ["products"]
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<MutationAck>> {
    state.store.delete(product::COLLECTION, &id).await?;
    Ok(web::Json(MutationAck::for_id(id.into_inner())))
}
