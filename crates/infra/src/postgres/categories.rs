use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use stockdesk_core::{Category, CategoryDraft, CategoryId, SerialId};

use crate::repository::{RepoResult, Repository};

#[derive(Debug, Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &PgRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        id: CategoryId::new(row.try_get("id")?),
        name: row.try_get("name")?,
    })
}

#[async_trait::async_trait]
impl Repository<Category> for PgCategoryRepository {
    async fn get_all(&self) -> RepoResult<Vec<Category>> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.iter().map(map_row).collect::<Result<_, _>>()?)
    }

    async fn get_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query("SELECT id, name FROM categories WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn create(&self, draft: CategoryDraft) -> RepoResult<CategoryId> {
        let mut conn = self.pool.acquire().await?;
        let id: i32 = sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
            .bind(&draft.name)
            .fetch_one(&mut *conn)
            .await?;
        Ok(CategoryId::new(id))
    }

    async fn update(&self, id: CategoryId, draft: CategoryDraft) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("UPDATE categories SET name = $1 WHERE id = $2")
            .bind(&draft.name)
            .bind(id.get())
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: CategoryId) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.get())
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
