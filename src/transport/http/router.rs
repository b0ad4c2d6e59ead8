use crate::domain::{FieldError, Product};
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{
    AppState, DeletedResponse, ErrorResponse, ErrorsResponse, HealthResponse, MessageResponse,
    ProductListResponse, ProductRequest, ProductResponse,
};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::api_root_handler,
        health::healthcheck_handler,
        products::get_products_handler,
        products::get_product_by_id_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::update_availability_handler,
        products::delete_product_handler
    ),
    components(schemas(
        Product,
        ProductRequest,
        ProductResponse,
        ProductListResponse,
        DeletedResponse,
        FieldError,
        ErrorsResponse,
        ErrorResponse,
        MessageResponse,
        HealthResponse
    )),
    tags(
        (name = "products", description = "Product catalog")
    )
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api", get(health::api_root_handler))
        .route(
            "/api/products",
            get(products::get_products_handler).post(products::create_product_handler),
        )
        .route(
            "/api/products/:id",
            get(products::get_product_by_id_handler)
                .put(products::update_product_handler)
                .patch(products::update_availability_handler)
                .delete(products::delete_product_handler),
        )
        .with_state(app_state)
}

/// Full application: routes, API docs under `/docs`, and a permissive CORS layer.
pub fn build_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
