use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    match services.products_search(query.nome.as_deref()) {
        Ok(found) => (StatusCode::OK, Json(dto::products_to_json(&found))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
