//! Postgres data mappers.
//!
//! Each repository call checks a connection out of the pool, runs exactly one
//! parameterized statement on it and hands it back when the guard drops (on every
//! exit path, including errors).

use std::time::Duration;

use anyhow::Context;
pub use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

mod categories;
mod orders;
mod products;
mod suppliers;
mod users;

pub use categories::PgCategoryRepository;
pub use orders::PgOrderRepository;
pub use products::PgProductRepository;
pub use suppliers::PgSupplierRepository;
pub use users::PgUserRepository;

/// Open a pool against `database_url`.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("failed to connect to Postgres")
}

/// Tables, created if missing.
///
/// Foreign-key columns are plain integers: references are not enforced by the store.
const SCHEMA: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            SERIAL PRIMARY KEY,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )
        "#,
    ),
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id   SERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    ),
    (
        "suppliers",
        r#"
        CREATE TABLE IF NOT EXISTS suppliers (
            id      SERIAL PRIMARY KEY,
            name    TEXT NOT NULL,
            contact TEXT NOT NULL DEFAULT ''
        )
        "#,
    ),
    (
        "products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id          SERIAL PRIMARY KEY,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price       NUMERIC(12, 2) NOT NULL,
            category_id INTEGER NOT NULL,
            supplier_id INTEGER NOT NULL
        )
        "#,
    ),
    (
        "orders",
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id          SERIAL PRIMARY KEY,
            product_id  INTEGER NOT NULL,
            quantity    INTEGER NOT NULL,
            total_price NUMERIC(12, 2) NOT NULL
        )
        "#,
    ),
];

/// Create any missing tables.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    for (table, ddl) in SCHEMA {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .with_context(|| format!("failed to create {table} table"))?;
    }
    tracing::info!(tables = SCHEMA.len(), "database schema ready");
    Ok(())
}
