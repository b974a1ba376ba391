use axum::{
    Router,
    routing::{get, post},
};

pub mod auth;
pub mod categories;
pub mod common;
pub mod orders;
pub mod products;
pub mod suppliers;
pub mod system;

/// Routes reachable without a token (mounted under `/api`).
pub fn public_router() -> Router {
    Router::new().route("/auth/login", post(auth::login))
}

/// Routes behind the bearer-token middleware (mounted under `/api`).
pub fn protected_router() -> Router {
    Router::new()
        .route("/auth/me", get(auth::me))
        .nest("/categories", categories::router())
        .nest("/suppliers", suppliers::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
}
