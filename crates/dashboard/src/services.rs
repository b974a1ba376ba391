//! Typed calls per resource, on top of [`ApiClient`].

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use stockdesk_core::{Record, UserId};

use crate::api::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and keep it in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let body = json!({ "email": email, "password": password });
        let value = self
            .client
            .request_public(Method::POST, "/auth/login", Some(&body))
            .await?;
        let outcome: LoginOutcome =
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;

        self.client.session().store_token(&outcome.token)?;
        tracing::info!(%email, "logged in");
        Ok(outcome)
    }

    pub async fn me(&self) -> Result<CurrentUser, ApiError> {
        self.client.get("/auth/me").await
    }
}

/// CRUD calls against `/{collection}` for one record type.
pub struct ResourceService<E: Record> {
    client: Arc<ApiClient>,
    _record: PhantomData<fn() -> E>,
}

impl<E: Record> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _record: PhantomData,
        }
    }
}

impl<E: Record> core::fmt::Debug for ResourceService<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResourceService")
            .field("collection", &E::COLLECTION)
            .finish()
    }
}

impl<E: Record> ResourceService<E> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    fn collection() -> String {
        format!("/{}", E::COLLECTION)
    }

    fn member(id: E::Id) -> String {
        format!("/{}/{}", E::COLLECTION, id)
    }

    pub async fn get_all(&self) -> Result<Vec<E>, ApiError> {
        self.client.get(&Self::collection()).await
    }

    pub async fn get_by_id(&self, id: E::Id) -> Result<E, ApiError> {
        self.client.get(&Self::member(id)).await
    }

    pub async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
        self.client.send(Method::POST, &Self::collection(), draft).await
    }

    pub async fn update(&self, id: E::Id, draft: &E::Draft) -> Result<(), ApiError> {
        let _: serde_json::Value = self.client.send(Method::PUT, &Self::member(id), draft).await?;
        Ok(())
    }

    pub async fn delete(&self, id: E::Id) -> Result<(), ApiError> {
        self.client.request(Method::DELETE, &Self::member(id), None).await?;
        Ok(())
    }
}
