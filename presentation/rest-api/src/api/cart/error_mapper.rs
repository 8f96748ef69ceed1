use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CartError::ProductNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.product_not_found",
            ),
            CartError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
