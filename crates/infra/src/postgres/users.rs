use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use stockdesk_core::{NewUser, User, UserId, normalize_email};

use crate::repository::{RepoResult, UserRepository};

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: UserId::new(row.try_get("id")?),
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
    })
}

#[async_trait::async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query("SELECT id, email, password_hash FROM users WHERE lower(email) = $1")
            .bind(normalize_email(email))
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn create(&self, user: NewUser) -> RepoResult<UserId> {
        let mut conn = self.pool.acquire().await?;
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
        )
        .bind(normalize_email(&user.email))
        .bind(&user.password_hash)
        .fetch_one(&mut *conn)
        .await?;
        Ok(UserId::new(id))
    }
}
