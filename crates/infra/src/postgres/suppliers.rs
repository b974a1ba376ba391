use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use stockdesk_core::{SerialId, Supplier, SupplierDraft, SupplierId};

use crate::repository::{RepoResult, Repository};

#[derive(Debug, Clone)]
pub struct PgSupplierRepository {
    pool: PgPool,
}

impl PgSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &PgRow) -> Result<Supplier, sqlx::Error> {
    Ok(Supplier {
        id: SupplierId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        contact: row.try_get("contact")?,
    })
}

#[async_trait::async_trait]
impl Repository<Supplier> for PgSupplierRepository {
    async fn get_all(&self) -> RepoResult<Vec<Supplier>> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query("SELECT id, name, contact FROM suppliers ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.iter().map(map_row).collect::<Result<_, _>>()?)
    }

    async fn get_by_id(&self, id: SupplierId) -> RepoResult<Option<Supplier>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query("SELECT id, name, contact FROM suppliers WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn create(&self, draft: SupplierDraft) -> RepoResult<SupplierId> {
        let mut conn = self.pool.acquire().await?;
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO suppliers (name, contact) VALUES ($1, $2) RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.contact)
        .fetch_one(&mut *conn)
        .await?;
        Ok(SupplierId::new(id))
    }

    async fn update(&self, id: SupplierId, draft: SupplierDraft) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("UPDATE suppliers SET name = $1, contact = $2 WHERE id = $3")
            .bind(&draft.name)
            .bind(&draft.contact)
            .bind(id.get())
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: SupplierId) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id.get())
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
