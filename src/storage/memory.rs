//! Process-local product store.
//!
//! Used by the test suites and when the server runs with `PRODUCT_STORE=memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{BackendError, OrderDirection, ProductStore};
use crate::domain::{Product, ProductFields, ProductId};

struct Rows {
    products: BTreeMap<ProductId, Product>,
    next_id: ProductId,
}

pub struct InMemoryProductStore {
    rows: RwLock<Rows>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.products.len()
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn ping(&self) -> Result<(), BackendError> {
        Ok(())
    }

    async fn find_all(&self, by_price: OrderDirection) -> Result<Vec<Product>, BackendError> {
        let rows = self.rows.read().await;
        let mut products: Vec<Product> = rows.products.values().cloned().collect();
        products.sort_by(|a, b| a.price.total_cmp(&b.price));
        if by_price == OrderDirection::Desc {
            products.reverse();
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, BackendError> {
        Ok(self.rows.read().await.products.get(&id).cloned())
    }

    async fn create(&self, fields: &ProductFields) -> Result<Product, BackendError> {
        let mut rows = self.rows.write().await;
        let id = rows.next_id;
        rows.next_id += 1;

        let now = Utc::now();
        let product = Product {
            id,
            name: fields.name.clone(),
            price: fields.price,
            quantity: fields.quantity,
            availability: fields.availability_or_default(),
            created_at: now,
            updated_at: now,
        };
        rows.products.insert(id, product.clone());
        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<Product, BackendError> {
        let mut rows = self.rows.write().await;
        let stored = rows
            .products
            .get_mut(&product.id)
            .ok_or(BackendError::RowMissing(product.id))?;
        *stored = Product {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..product.clone()
        };
        Ok(stored.clone())
    }

    async fn destroy(&self, product: &Product) -> Result<(), BackendError> {
        self.rows.write().await.products.remove(&product.id);
        Ok(())
    }
}
