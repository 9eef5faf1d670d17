use axum::{routing::get, Router};

pub mod products;
pub mod reports;
pub mod search;
pub mod system;

/// Router for all product endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/produtos", products::router())
        .route("/relatorio", get(reports::stock_report))
        .route("/produto/buscar", get(search::search_products))
}
