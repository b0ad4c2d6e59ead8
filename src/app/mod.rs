//! Application layer: request outcome resolution and error shaping.

pub mod errors;
pub mod product_service;

pub use errors::ApiError;
pub use product_service::ProductService;
