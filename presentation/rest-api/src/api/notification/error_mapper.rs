use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::notification::errors::NotificationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for NotificationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            NotificationError::NotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "notification.not_found",
            ),
            NotificationError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
