pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{ApiError, ProductService};
pub use domain::{FieldError, Product, ProductFields, ProductId, ValidationOutcome};
pub use storage::{BackendError, InMemoryProductStore, PgProductStore, ProductStore};
