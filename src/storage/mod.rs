//! Product persistence: the store contract and its implementations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Product, ProductFields, ProductId};
use crate::infra::config::{self, StoreKind};

pub mod memory;
pub mod postgres;
pub mod unavailable;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;
pub use unavailable::UnavailableStore;

/// Storage or connectivity failure. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("product {0} no longer exists")]
    RowMissing(ProductId),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Sort direction for listing products by price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Contract the request pipeline needs from a backing store.
///
/// Every method is a single operation; none of them span a transaction.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> Result<(), BackendError>;

    async fn find_all(&self, by_price: OrderDirection) -> Result<Vec<Product>, BackendError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, BackendError>;

    /// Inserts a new row; the store assigns `id` and timestamps.
    async fn create(&self, fields: &ProductFields) -> Result<Product, BackendError>;

    /// Persists the mutable fields of `product` and returns the stored row.
    async fn save(&self, product: &Product) -> Result<Product, BackendError>;

    async fn destroy(&self, product: &Product) -> Result<(), BackendError>;
}

/// Opens the store selected by the environment.
///
/// Called once at process start. The caller decides what to do on failure.
pub async fn connect() -> Result<Arc<dyn ProductStore>, BackendError> {
    match config::store_kind() {
        StoreKind::Memory => Ok(Arc::new(InMemoryProductStore::new())),
        StoreKind::Postgres => {
            let database_url = config::database_url().ok_or(BackendError::MissingDatabaseUrl)?;
            let store =
                PgProductStore::connect(&database_url, config::database_max_connections()).await?;
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_direction_renders_sql_keywords() {
        assert_eq!(OrderDirection::Asc.as_sql(), "ASC");
        assert_eq!(OrderDirection::Desc.as_sql(), "DESC");
    }
}
