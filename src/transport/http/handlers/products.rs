use crate::app::ApiError;
use crate::domain::validation::{INVALID_ID, INVALID_JSON};
use crate::domain::FieldError;
use crate::transport::http::types::{
    AppState, DeletedResponse, ErrorResponse, ErrorsResponse, ProductListResponse,
    ProductRequest, ProductResponse,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

/// Raw JSON body for the validation rules.
///
/// A request without a JSON content type is checked as an empty object; a body that
/// does not parse is a shape error on `body`.
fn request_body(request: Result<Json<JsonValue>, JsonRejection>) -> Result<JsonValue, ApiError> {
    match request {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(JsonValue::Object(Default::default())),
        Err(e) => {
            tracing::debug!(error = %e, "rejected product body");
            Err(ApiError::Shape(vec![FieldError::new("body", INVALID_JSON)]))
        }
    }
}

/// The `id` path segment as sent.
///
/// A segment axum cannot extract (e.g. not valid UTF-8 once decoded) fails the
/// identifier rule like any other malformed id.
fn path_id(id: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(e) => {
            tracing::debug!(error = %e, "rejected product id");
            Err(ApiError::Shape(vec![FieldError::new("id", INVALID_ID)]))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All products, most expensive first", body = ProductListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_products_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state.products.list().await?;
    Ok(Json(ProductListResponse { data }))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(
        ("id" = String, Path, description = "Product id (integer)")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ErrorsResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product_by_id_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = path_id(id)?;
    let data = state.products.get(&id).await?;
    Ok(Json(ProductResponse { data }))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid payload", body = ErrorsResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = request_body(request)?;
    let data = state.products.create(&body).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse { data })))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(
        ("id" = String, Path, description = "Product id (integer)")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid id or payload", body = ErrorsResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = path_id(id)?;
    // The id is checked before the body so a bad id always wins.
    crate::domain::check_product_id(&id).map_err(ApiError::Shape)?;
    let body = request_body(request)?;
    let data = state.products.replace(&id, &body).await?;
    Ok(Json(ProductResponse { data }))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "products",
    params(
        ("id" = String, Path, description = "Product id (integer)")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ErrorsResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_availability_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = path_id(id)?;
    let data = state.products.toggle_availability(&id).await?;
    Ok(Json(ProductResponse { data }))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(
        ("id" = String, Path, description = "Product id (integer)")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ErrorsResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = path_id(id)?;
    let message = state.products.delete(&id).await?;
    Ok(Json(DeletedResponse {
        data: message.to_string(),
    }))
}
