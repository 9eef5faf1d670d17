use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::dto;
use crate::app::services::AppServices;

/// Product count and total stock value.
pub async fn stock_report(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let report = services.stock_report();
    (StatusCode::OK, Json(dto::report_to_json(report))).into_response()
}
