use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use stockdesk_auth::{Credentials, check_credentials};
use stockdesk_core::normalize_email;

use crate::app::dto::{LoginResponse, MeResponse};
use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::UserContext;

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Response {
    let Json(credentials) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };

    let email = normalize_email(&credentials.email);
    if email.is_empty() || credentials.password.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "email and password are required",
        );
    }

    let account = match services.users.find_by_email(&email).await {
        Ok(account) => account,
        Err(e) => return errors::repo_error_to_response(e),
    };

    let password = credentials.password;
    let user = match tokio::task::spawn_blocking(move || check_credentials(account, &password)).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(%email, "login rejected");
            return errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", "invalid credentials");
        }
        Err(e) => {
            tracing::error!(error = %e, "credential check did not complete");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "could not check credentials",
            );
        }
    };

    match services.issuer.issue(&user, Utc::now()) {
        Ok(issued) => {
            tracing::info!(user_id = %user.id, "login succeeded");
            (
                StatusCode::OK,
                Json(LoginResponse {
                    token: issued.token,
                    expires_at: issued.expires_at,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "token issuance failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "could not issue a token",
            )
        }
    }
}

pub async fn me(Extension(user): Extension<UserContext>) -> Response {
    Json(MeResponse {
        id: user.user_id(),
        email: user.email().to_string(),
    })
    .into_response()
}
