use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use stockdesk_core::{CategoryId, Product, ProductDraft, ProductId, SerialId, SupplierId};

use crate::repository::{RepoResult, Repository};

#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, name, description, price, category_id, supplier_id";

fn map_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: ProductId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get::<Decimal, _>("price")?,
        category_id: CategoryId::new(row.try_get("category_id")?),
        supplier_id: SupplierId::new(row.try_get("supplier_id")?),
    })
}

#[async_trait::async_trait]
impl Repository<Product> for PgProductRepository {
    async fn get_all(&self) -> RepoResult<Vec<Product>> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM products ORDER BY id"))
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.iter().map(map_row).collect::<Result<_, _>>()?)
    }

    async fn get_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM products WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn create(&self, draft: ProductDraft) -> RepoResult<ProductId> {
        let mut conn = self.pool.acquire().await?;
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, description, price, category_id, supplier_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.category_id.get())
        .bind(draft.supplier_id.get())
        .fetch_one(&mut *conn)
        .await?;
        Ok(ProductId::new(id))
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1, description = $2, price = $3, category_id = $4, supplier_id = $5
            WHERE id = $6
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.category_id.get())
        .bind(draft.supplier_id.get())
        .bind(id.get())
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ProductId) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
