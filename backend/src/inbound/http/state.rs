//! Shared HTTP adapter state.
//!
//! Handlers receive their dependencies via `actix_web::web::Data` so they
//! depend only on the domain port and stay testable with in-memory store
//! doubles. There is no global client singleton; the store is constructed
//! once at startup and injected here.

use std::sync::Arc;

use crate::domain::{DocumentStore, FavoritesService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The remote document-store port.
    pub store: Arc<dyn DocumentStore>,
    /// Idempotency-guarded favorites use-cases.
    pub favorites: Arc<FavoritesService>,
}

impl HttpState {
    /// Bundle a store and the services built over it.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let favorites = Arc::new(FavoritesService::new(Arc::clone(&store)));
        Self { store, favorites }
    }
}
