//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repository wiring (Postgres or in-memory) and admin seeding
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response bodies that are not domain records
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use stockdesk_auth::{Hs256Jwt, JwtValidator};

use crate::config::{AdminSeed, ApiConfig};
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router from configuration (public entrypoint used by `main.rs`).
pub async fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let jwt = Arc::new(Hs256Jwt::with_ttl(config.jwt_secret.as_bytes(), config.token_ttl));
    let services = services::build_services(config, jwt.clone()).await?;
    Ok(router(Arc::new(services), jwt, cors_layer(config)))
}

/// In-memory app with one seeded account (local runs and tests).
pub async fn build_in_memory_app(jwt_secret: &str, admin: &AdminSeed) -> anyhow::Result<Router> {
    let jwt = Arc::new(Hs256Jwt::new(jwt_secret.as_bytes()));
    let services = AppServices::in_memory(jwt.clone());
    services::seed_admin(services.users.as_ref(), admin).await?;
    Ok(router(Arc::new(services), jwt, CorsLayer::permissive()))
}

/// Assemble routes around already-built services.
pub fn router(services: Arc<AppServices>, jwt: Arc<dyn JwtValidator>, cors: CorsLayer) -> Router {
    let auth_state = middleware::AuthState { jwt };

    // Everything except login and health requires a bearer token.
    let protected = routes::protected_router().route_layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    let api = routes::public_router().merge(protected);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    match &config.cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .expose_headers([header::LOCATION]),
        None => {
            tracing::warn!("CORS_ORIGIN not set; allowing any origin");
            CorsLayer::permissive()
        }
    }
}
