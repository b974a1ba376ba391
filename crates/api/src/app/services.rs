//! Repository wiring: Postgres when `DATABASE_URL` is set, in-memory otherwise.

use std::sync::Arc;

use anyhow::Context;
use stockdesk_infra::postgres::PgPool;

use stockdesk_auth::{TokenIssuer, hash_password};
use stockdesk_core::{Category, NewUser, Order, Product, Supplier};
use stockdesk_infra::postgres::{
    self, PgCategoryRepository, PgOrderRepository, PgProductRepository, PgSupplierRepository,
    PgUserRepository,
};
use stockdesk_infra::{InMemoryRepository, InMemoryUserRepository, Repository, UserRepository};

use crate::config::{AdminSeed, ApiConfig};

/// Everything a handler can reach.
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<dyn Repository<Category>>,
    pub suppliers: Arc<dyn Repository<Supplier>>,
    pub products: Arc<dyn Repository<Product>>,
    pub orders: Arc<dyn Repository<Order>>,
    pub users: Arc<dyn UserRepository>,
    pub issuer: Arc<dyn TokenIssuer>,
}

impl AppServices {
    pub fn in_memory(issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            categories: Arc::new(InMemoryRepository::<Category>::new()),
            suppliers: Arc::new(InMemoryRepository::<Supplier>::new()),
            products: Arc::new(InMemoryRepository::<Product>::new()),
            orders: Arc::new(InMemoryRepository::<Order>::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            issuer,
        }
    }

    pub fn postgres(pool: PgPool, issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            suppliers: Arc::new(PgSupplierRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool.clone())),
            orders: Arc::new(PgOrderRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool)),
            issuer,
        }
    }
}

pub async fn build_services(config: &ApiConfig, issuer: Arc<dyn TokenIssuer>) -> anyhow::Result<AppServices> {
    let services = match &config.database_url {
        Some(url) => {
            let pool = postgres::connect(url, config.database_max_connections).await?;
            postgres::ensure_schema(&pool).await?;
            tracing::info!("using Postgres stores");
            AppServices::postgres(pool, issuer)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory stores (data is lost on restart)");
            AppServices::in_memory(issuer)
        }
    };

    if let Some(admin) = &config.admin {
        seed_admin(services.users.as_ref(), admin).await?;
    }

    Ok(services)
}

/// Create the seed account unless an account with that e-mail already exists.
///
/// Returns whether an account was created.
pub async fn seed_admin(users: &dyn UserRepository, admin: &AdminSeed) -> anyhow::Result<bool> {
    if users
        .find_by_email(&admin.email)
        .await
        .context("failed to look up seed account")?
        .is_some()
    {
        return Ok(false);
    }

    let password = admin.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("password hashing task failed")??;
    let id = users
        .create(NewUser {
            email: admin.email.clone(),
            password_hash,
        })
        .await
        .context("failed to create seed account")?;

    tracing::info!(user_id = %id, email = %admin.email, "seeded admin account");
    Ok(true)
}
