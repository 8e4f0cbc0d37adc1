//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] gathers every REST handler and request/response schema into one
//! generated specification. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::MutationAck;
use crate::models::comment::{CommentCreate, CommentUpdate};
use crate::models::favorite::{FavoriteCreateRequest, FavoriteStatus};
use crate::models::photo::{PhotoCreate, PhotoUpdate};
use crate::models::poi::{PoiCreate, PoiUpdate};
use crate::models::product::{ProductCreate, ProductUpdate};
use crate::models::region::{RegionCreate, RegionUpdate};
use crate::models::theme::{ThemeCreate, ThemeUpdate};

/// OpenAPI document for the gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tourism content gateway API",
        description = "REST interface over the remote document store: regions, \
                       POIs, themes, photos, comments, products, and favorites."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::regions::create_region,
        crate::inbound::http::regions::list_regions,
        crate::inbound::http::regions::get_region,
        crate::inbound::http::regions::update_region,
        crate::inbound::http::regions::delete_region,
        crate::inbound::http::pois::create_poi,
        crate::inbound::http::pois::list_pois,
        crate::inbound::http::pois::get_poi,
        crate::inbound::http::pois::update_poi,
        crate::inbound::http::pois::delete_poi,
        crate::inbound::http::themes::create_theme,
        crate::inbound::http::themes::list_themes,
        crate::inbound::http::themes::get_theme,
        crate::inbound::http::themes::update_theme,
        crate::inbound::http::themes::delete_theme,
        crate::inbound::http::photos::create_photo,
        crate::inbound::http::photos::list_photos,
        crate::inbound::http::photos::get_photo,
        crate::inbound::http::photos::update_photo,
        crate::inbound::http::photos::delete_photo,
        crate::inbound::http::comments::create_comment,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::comments::get_comment,
        crate::inbound::http::comments::update_comment,
        crate::inbound::http::comments::delete_comment,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::favorites::create_favorite,
        crate::inbound::http::favorites::list_favorites,
        crate::inbound::http::favorites::check_favorite_status,
        crate::inbound::http::favorites::delete_favorite,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(
        MutationAck,
        RegionCreate,
        RegionUpdate,
        PoiCreate,
        PoiUpdate,
        ThemeCreate,
        ThemeUpdate,
        PhotoCreate,
        PhotoUpdate,
        CommentCreate,
        CommentUpdate,
        ProductCreate,
        ProductUpdate,
        FavoriteCreateRequest,
        FavoriteStatus,
    )),
    tags(
        (name = "regions", description = "Tourism regions"),
        (name = "pois", description = "Points of interest"),
        (name = "themes", description = "Curated topic collections"),
        (name = "photos", description = "User-submitted photos"),
        (name = "comments", description = "POI comments"),
        (name = "products", description = "Local products"),
        (name = "favorites", description = "Per-resource favorites"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;
