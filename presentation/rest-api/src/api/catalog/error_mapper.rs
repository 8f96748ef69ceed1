use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CatalogError::ProductNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "catalog.product_not_found",
            ),
            CatalogError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.name_empty",
            ),
            CatalogError::NegativePrice => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.negative_price",
            ),
            CatalogError::PriceTooHigh => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.price_too_high",
            ),
            CatalogError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
