use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            OrderError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "order.not_found")
            }
            OrderError::EmptyCart => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", "order.empty_cart")
            }
            OrderError::InvalidShippingInfo(errors) => {
                let mut body = ErrorResponse::new("ValidationError", "checkout.invalid_shipping_info");
                body.fields = errors.iter().map(FieldErrorResponse::from).collect();
                (StatusCode::BAD_REQUEST, Json(body))
            }
            OrderError::IdCollision => {
                error_response(StatusCode::CONFLICT, "Conflict", "order.id_collision")
            }
            OrderError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
