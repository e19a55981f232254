use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use dashboard_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_error_maps_to_a_client_status() {
        let cases = [
            (DomainError::validation("amount must be greater than zero"), StatusCode::BAD_REQUEST),
            (DomainError::invalid_id("CustomerId must not be empty"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("customer c9"), StatusCode::NOT_FOUND),
        ];

        for (err, status) in cases {
            assert_eq!(domain_error_to_response(err).status(), status);
        }
    }
}
