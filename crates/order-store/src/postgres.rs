use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    OrderRecord, PageRequest, Result, StoreError,
    store::OrderStore,
};

/// PostgreSQL-backed order store.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_record(row: PgRow) -> Result<OrderRecord> {
        Ok(OrderRecord {
            id: row.try_get::<String, _>("id")?.into(),
            price: row.try_get("price")?,
            tax: row.try_get("tax")?,
            final_price: row.try_get("final_price")?,
        })
    }
}

/// Resolves the caller-controlled sort field against the actual order
/// columns. `ORDER BY` targets cannot be bound as query parameters, so the
/// whitelist is what keeps the interpolation injection-safe; anything
/// unrecognized sorts by `id`.
fn sort_column(field: &str) -> &'static str {
    match field {
        "price" => "price",
        "tax" => "tax",
        "final_price" => "final_price",
        _ => "id",
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn save(&self, record: &OrderRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (id, price, tax, final_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id.as_str())
        .bind(record.price)
        .bind(record.tax)
        .bind(record.final_price)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return StoreError::DuplicateId(record.id.to_string());
            }
            StoreError::Database(e)
        })?;

        Ok(())
    }

    async fn find_all(&self, page: &PageRequest) -> Result<Vec<OrderRecord>> {
        let query = format!(
            "SELECT id, price, tax, final_price FROM orders \
             ORDER BY {} ASC LIMIT $1 OFFSET $2",
            sort_column(page.sort())
        );

        let rows = sqlx::query(&query)
            .bind(i64::from(page.limit()))
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_record).collect()
    }

    async fn get_total(&self) -> Result<u64> {
        let total: i64 = sqlx::query_scalar("SELECT count(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(total as u64)
    }
}
