use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use stockdesk_core::{Order, OrderDraft, OrderId, ProductId, SerialId};

use crate::repository::{RepoResult, Repository};

#[derive(Debug, Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &PgRow) -> Result<Order, sqlx::Error> {
    Ok(Order {
        id: OrderId::new(row.try_get("id")?),
        product_id: ProductId::new(row.try_get("product_id")?),
        quantity: row.try_get("quantity")?,
        total_price: row.try_get::<Decimal, _>("total_price")?,
    })
}

#[async_trait::async_trait]
impl Repository<Order> for PgOrderRepository {
    async fn get_all(&self) -> RepoResult<Vec<Order>> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query("SELECT id, product_id, quantity, total_price FROM orders ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.iter().map(map_row).collect::<Result<_, _>>()?)
    }

    async fn get_by_id(&self, id: OrderId) -> RepoResult<Option<Order>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query("SELECT id, product_id, quantity, total_price FROM orders WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn create(&self, draft: OrderDraft) -> RepoResult<OrderId> {
        let mut conn = self.pool.acquire().await?;
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO orders (product_id, quantity, total_price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(draft.product_id.get())
        .bind(draft.quantity)
        .bind(draft.total_price)
        .fetch_one(&mut *conn)
        .await?;
        Ok(OrderId::new(id))
    }

    async fn update(&self, id: OrderId, draft: OrderDraft) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            "UPDATE orders SET product_id = $1, quantity = $2, total_price = $3 WHERE id = $4",
        )
        .bind(draft.product_id.get())
        .bind(draft.quantity)
        .bind(draft.total_price)
        .bind(id.get())
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: OrderId) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.get())
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
