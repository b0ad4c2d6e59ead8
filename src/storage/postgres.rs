//! Product store backed by a PostgreSQL table.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use super::{BackendError, OrderDirection, ProductStore};
use crate::domain::{Product, ProductFields, ProductId};

const PRODUCT_COLUMNS: &str = "id, name, price, quantity, availability, created_at, updated_at";

/// A product store that uses a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to `database_url` and makes sure the `products` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, BackendError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let store = Self::new(pool);
        store.sync().await?;
        Ok(store)
    }

    async fn sync(&self) -> Result<(), BackendError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                quantity DOUBLE PRECISION NOT NULL,
                availability BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        quantity: row.try_get("quantity")?,
        availability: row.try_get("availability")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn ping(&self) -> Result<(), BackendError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_all(&self, by_price: OrderDirection) -> Result<Vec<Product>, BackendError> {
        let sql = format!(
            "SELECT {} FROM products ORDER BY price {}",
            PRODUCT_COLUMNS,
            by_price.as_sql()
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            products.push(product_from_row(row)?);
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, BackendError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(product_from_row).transpose()?)
    }

    async fn create(&self, fields: &ProductFields) -> Result<Product, BackendError> {
        let sql = format!(
            "INSERT INTO products (name, price, quantity, availability)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            PRODUCT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&fields.name)
            .bind(fields.price)
            .bind(fields.quantity)
            .bind(fields.availability_or_default())
            .fetch_one(&self.pool)
            .await?;
        Ok(product_from_row(&row)?)
    }

    async fn save(&self, product: &Product) -> Result<Product, BackendError> {
        let sql = format!(
            "UPDATE products
             SET name = $2, price = $3, quantity = $4, availability = $5, updated_at = now()
             WHERE id = $1
             RETURNING {}",
            PRODUCT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.quantity)
            .bind(product.availability)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(BackendError::RowMissing(product.id))?;
        Ok(product_from_row(&row)?)
    }

    async fn destroy(&self, product: &Product) -> Result<(), BackendError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
