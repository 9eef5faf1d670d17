use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use estoque_core::DomainError;
use estoque_products::store::NOT_FOUND_MESSAGE;

/// Body field carrying the message of a validation or not-found error.
pub const ERROR_FIELD: &str = "erro";
/// Body field carrying the message of an empty search result.
pub const NOTICE_FIELD: &str = "mensagem";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, ERROR_FIELD, msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, ERROR_FIELD, msg),
        // Ids only arrive as path segments; one that does not parse names no product.
        DomainError::InvalidId(_) => {
            json_error(StatusCode::NOT_FOUND, ERROR_FIELD, NOT_FOUND_MESSAGE)
        }
        DomainError::EmptyResult(msg) => json_error(StatusCode::NOT_FOUND, NOTICE_FIELD, msg),
    }
}

pub fn json_error(
    status: StatusCode,
    field: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), json!(message.into()));
    (status, axum::Json(serde_json::Value::Object(body))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (DomainError::validation("x"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("x"), StatusCode::NOT_FOUND),
            (DomainError::invalid_id("x"), StatusCode::NOT_FOUND),
            (DomainError::empty_result("x"), StatusCode::NOT_FOUND),
        ];
        for (err, status) in cases {
            assert_eq!(domain_error_to_response(err).status(), status);
        }
    }
}
