//! Gateway entry-point: wires the REST surface, health probes, and OpenAPI docs.

use std::sync::Arc;

use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::RequestLog;
use backend::api::health::{HealthState, live, ready};
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::DocumentStore;
use backend::inbound::http::{self, HttpState};
use backend::outbound::HttpDocumentStore;
use backend::server::GatewayConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = GatewayConfig::from_env().map_err(std::io::Error::other)?;
    let store = HttpDocumentStore::for_environment(&config.env_id, config.access_token.clone())
        .map_err(std::io::Error::other)?;
    let state = HttpState::new(Arc::new(store) as Arc<dyn DocumentStore>);

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), state.clone()))
        .bind(("0.0.0.0", config.port))?;

    health_state.mark_ready();
    info!(port = config.port, env_id = %config.env_id, "gateway listening");
    server.run().await
}

fn build_app(
    health_state: web::Data<HealthState>,
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type, Authorization"));

    let app = App::new()
        .app_data(health_state)
        .app_data(web::Data::new(state))
        .wrap(RequestLog)
        .service(web::scope("/api").wrap(cors).configure(http::configure))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
