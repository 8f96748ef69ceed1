use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            WishlistError::ProductNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "wishlist.product_not_found",
            ),
            WishlistError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
