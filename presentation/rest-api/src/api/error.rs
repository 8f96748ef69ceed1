use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::order::shipping::FieldError;

#[derive(Object, Debug)]
pub struct FieldErrorResponse {
    /// Form field in camelCase, e.g. `postalCode`
    pub field: String,
    pub code: String,
}

impl From<&FieldError> for FieldErrorResponse {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.to_string(),
            code: error.code.to_string(),
        }
    }
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field problems, only present for form validation failures
    #[oai(default, skip_serializing_if_is_empty)]
    pub fields: Vec<FieldErrorResponse>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            fields: Vec::new(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn error_response(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(name, message)))
}
