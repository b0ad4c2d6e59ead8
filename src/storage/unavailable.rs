//! Stand-in store used when the database could not be reached at startup.

use async_trait::async_trait;

use super::{BackendError, OrderDirection, ProductStore};
use crate::domain::{Product, ProductFields, ProductId};

/// Fails every operation with the reason the real store could not be opened.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn err(&self) -> BackendError {
        BackendError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl ProductStore for UnavailableStore {
    async fn ping(&self) -> Result<(), BackendError> {
        Err(self.err())
    }

    async fn find_all(&self, _by_price: OrderDirection) -> Result<Vec<Product>, BackendError> {
        Err(self.err())
    }

    async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, BackendError> {
        Err(self.err())
    }

    async fn create(&self, _fields: &ProductFields) -> Result<Product, BackendError> {
        Err(self.err())
    }

    async fn save(&self, _product: &Product) -> Result<Product, BackendError> {
        Err(self.err())
    }

    async fn destroy(&self, _product: &Product) -> Result<(), BackendError> {
        Err(self.err())
    }
}
