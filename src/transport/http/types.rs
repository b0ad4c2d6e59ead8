use crate::app::ProductService;
use crate::domain::{FieldError, Product};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(products: ProductService) -> Self {
        Self { products }
    }
}

/// Body accepted by create and full update.
///
/// Handlers read the raw JSON so every field can be validated as sent; this type only
/// documents the expected shape. Numeric fields also accept numeric strings (`"23"`).
#[allow(dead_code)]
#[derive(Deserialize, Debug, ToSchema)]
pub struct ProductRequest {
    #[schema(example = "Monitor 32 Pulgadas")]
    pub name: String,
    #[schema(example = 300)]
    pub price: f64,
    #[schema(example = 5)]
    pub quantity: f64,
    /// Defaults to `true` on create; left unchanged on update when omitted.
    #[serde(default)]
    pub availability: Option<bool>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "Producto Eliminado")]
    pub data: String,
}

/// 400 body: every failed check, in rule order.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorsResponse {
    pub errors: Vec<FieldError>,
}

/// 404 / 500 body.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Producto No Encontrado")]
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Desde API")]
    pub msg: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
