//! Fetch wrapper around the REST API.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::session::Session;
use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the token; the session has already been logged out.
    #[error("session expired; please log in again")]
    Unauthorized,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not persist session: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(StatusCode::UNAUTHORIZED.as_u16()),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnUnauthorized {
    Logout,
    Report,
}

/// Sends JSON requests to `{base_url}{endpoint}` with the session's bearer token.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Authenticated request. A 401 logs the session out before returning
    /// [`ApiError::Unauthorized`].
    pub async fn request(&self, method: Method, endpoint: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.dispatch(method, endpoint, body, OnUnauthorized::Logout).await
    }

    /// Same as [`ApiClient::request`] but a 401 is reported as a plain
    /// [`ApiError::Http`] and leaves the session alone (used by login).
    pub async fn request_public(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.dispatch(method, endpoint, body, OnUnauthorized::Report).await
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let value = self.request(Method::GET, endpoint, None).await?;
        decode(value)
    }

    pub async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.request(method, endpoint, Some(&body)).await?;
        decode(value)
    }

    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        on_unauthorized: OnUnauthorized,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED && on_unauthorized == OnUnauthorized::Logout {
            tracing::info!(%url, "token rejected; logging out");
            self.session.logout();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: error_message(status, &text),
            });
        }

        Ok(success_body(&text))
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Server-provided `message`, or a generic one naming the status.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}

/// 2xx bodies that are empty or not JSON (e.g. 204) become `{"success": true}`.
fn success_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return json!({ "success": true });
    }
    serde_json::from_str(body).unwrap_or_else(|_| json!({ "success": true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_plain_text_success_is_generic() {
        assert_eq!(success_body(""), json!({ "success": true }));
        assert_eq!(success_body("  \n"), json!({ "success": true }));
        assert_eq!(success_body("OK"), json!({ "success": true }));
    }

    #[test]
    fn json_success_is_passed_through() {
        assert_eq!(success_body(r#"{"id":3,"name":"Tools"}"#), json!({ "id": 3, "name": "Tools" }));
        assert_eq!(success_body("[]"), json!([]));
    }

    #[test]
    fn server_message_wins() {
        let body = r#"{"error":"validation_error","message":"quantity must be greater than zero"}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "quantity must be greater than zero"
        );
    }

    #[test]
    fn missing_message_names_the_status() {
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "HTTP error! status: 404");
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"x"}"#),
            "HTTP error! status: 500"
        );
    }

    #[test]
    fn status_is_exposed_for_http_errors() {
        let err = ApiError::Http {
            status: 404,
            message: "category not found".into(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "category not found");
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Network("refused".into()).status(), None);
    }
}
