//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the store handle shared by every handler
//! - `routes/`: HTTP routes + handlers (one file per endpoint area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use estoque_products::{InMemoryProductStore, ProductStore};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with a fresh, empty store.
pub fn build_app(config: &ApiConfig) -> Router {
    let store = Arc::new(InMemoryProductStore::with_strategy(config.id_strategy));
    build_app_with_store(store)
}

/// Build the router around an existing store.
pub fn build_app_with_store(store: Arc<dyn ProductStore>) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}
