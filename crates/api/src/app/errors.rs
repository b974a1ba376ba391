use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockdesk_core::DomainError;
use stockdesk_infra::RepoError;

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

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

/// Store failures are not recoverable by the caller: log and answer 500.
pub fn repo_error_to_response(err: RepoError) -> axum::response::Response {
    tracing::error!(error = %err, "repository call failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        "the data store could not complete the request",
    )
}

/// Missing fields, wrong types and non-JSON bodies all map to 400.
pub fn body_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn not_found(label: &str) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("{label} not found"))
}
