//! Product domain: the entity and the request validation rules.

pub mod product;
pub mod validation;

pub use product::{Product, ProductFields, ProductId};
pub use validation::{check_product_id, check_product_payload, FieldError, ValidationOutcome};
