//! Request outcome resolution for the product routes.
//!
//! Each operation runs the same single pass: check the id shape, check the payload
//! shape, look the row up, then read or mutate it. The first failing stage decides the
//! response and nothing after it runs, so a rejected request never touches the store.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::app::errors::ApiError;
use crate::domain::validation::INVALID_JSON;
use crate::domain::{
    check_product_id, check_product_payload, FieldError, Product, ProductFields, ProductId,
};
use crate::storage::{BackendError, OrderDirection, ProductStore};

pub const PRODUCT_DELETED: &str = "Producto Eliminado";

/// Resolves product requests against a [`ProductStore`].
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ProductStore> {
        &self.store
    }

    /// All products, most expensive first.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.store.find_all(OrderDirection::Desc).await?)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Product, ApiError> {
        let id = parse_id(raw_id)?;
        self.lookup(id).await
    }

    pub async fn create(&self, body: &JsonValue) -> Result<Product, ApiError> {
        let fields = product_fields(body)?;
        let product = self.store.create(&fields).await?;
        tracing::info!(id = product.id, "product created");
        Ok(product)
    }

    /// Full update: overwrites name, price, quantity and (when sent) availability.
    pub async fn replace(&self, raw_id: &str, body: &JsonValue) -> Result<Product, ApiError> {
        let id = parse_id(raw_id)?;
        let fields = product_fields(body)?;
        let mut product = self.lookup(id).await?;
        product.apply(&fields);
        let product = self.persist(&product).await?;
        tracing::info!(id, "product updated");
        Ok(product)
    }

    /// Partial update: flips `availability`.
    pub async fn toggle_availability(&self, raw_id: &str) -> Result<Product, ApiError> {
        let id = parse_id(raw_id)?;
        let mut product = self.lookup(id).await?;
        product.availability = !product.availability;
        let product = self.persist(&product).await?;
        tracing::info!(id, availability = product.availability, "product availability toggled");
        Ok(product)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<&'static str, ApiError> {
        let id = parse_id(raw_id)?;
        let product = self.lookup(id).await?;
        self.store.destroy(&product).await?;
        tracing::info!(id, "product deleted");
        Ok(PRODUCT_DELETED)
    }

    async fn lookup(&self, id: ProductId) -> Result<Product, ApiError> {
        self.store.find_by_id(id).await?.ok_or(ApiError::NotFound)
    }

    // A row deleted between lookup and save is reported like any other missing row.
    async fn persist(&self, product: &Product) -> Result<Product, ApiError> {
        match self.store.save(product).await {
            Ok(saved) => Ok(saved),
            Err(BackendError::RowMissing(_)) => Err(ApiError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

fn parse_id(raw_id: &str) -> Result<ProductId, ApiError> {
    check_product_id(raw_id).map_err(ApiError::Shape)
}

fn product_fields(body: &JsonValue) -> Result<ProductFields, ApiError> {
    check_product_payload(body)
        .into_result()
        .map_err(ApiError::Shape)?;
    ProductFields::from_payload(body)
        .ok_or_else(|| ApiError::Shape(vec![FieldError::new("body", INVALID_JSON)]))
}
