//! Consistent error responses for the product routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::FieldError;
use crate::storage::BackendError;
use crate::transport::http::types::{ErrorResponse, ErrorsResponse};

pub const PRODUCT_NOT_FOUND: &str = "Producto No Encontrado";
pub const INTERNAL_ERROR: &str = "Error interno del servidor";

/// Every way a product request can fail.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed id or payload; always 400.
    #[error("request failed validation with {} error(s)", .0.len())]
    Shape(Vec<FieldError>),
    /// Well-formed id with no matching row; always 404.
    #[error("product not found")]
    NotFound,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Shape(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Shape(errors) => (status, Json(ErrorsResponse { errors })).into_response(),
            ApiError::NotFound => (
                status,
                Json(ErrorResponse {
                    error: PRODUCT_NOT_FOUND.to_string(),
                }),
            )
                .into_response(),
            ApiError::Backend(e) => {
                // Details stay in the log; clients only get a generic message.
                tracing::error!(error = %e, "storage operation failed");
                (
                    status,
                    Json(ErrorResponse {
                        error: INTERNAL_ERROR.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_error_kind() {
        assert_eq!(ApiError::Shape(vec![]).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Backend(BackendError::MissingDatabaseUrl).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
