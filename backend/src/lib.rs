//! Gateway library modules.

pub mod api;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod models;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::RequestLog;
