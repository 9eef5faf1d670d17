use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// A body that is missing or not valid JSON carries no fields.
fn body_or_empty(body: Result<Json<dto::ProductRequest>, JsonRejection>) -> dto::ProductRequest {
    match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable product body; treating as empty");
            dto::ProductRequest::default()
        }
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    match services.products_create(body_or_empty(body).into()) {
        Ok(p) => (StatusCode::CREATED, Json(dto::product_to_json(&p))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.products_list();
    (StatusCode::OK, Json(dto::products_to_json(&items))).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.products_get(&id) {
        Ok(p) => (StatusCode::OK, Json(dto::product_to_json(&p))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    match services.products_update(&id, body_or_empty(body).into()) {
        Ok(p) => (StatusCode::OK, Json(dto::product_to_json(&p))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.products_delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
