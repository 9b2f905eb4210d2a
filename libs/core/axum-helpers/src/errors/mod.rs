pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single error object in the `errors` array.
///
/// ```json
/// { "code": "Error-2", "title": "ID does not exist" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorObject {
    /// Machine-readable code (`Error-N`)
    #[schema(example = "Error-1")]
    pub code: String,
    /// Human-readable summary
    #[schema(example = "A name is required")]
    pub title: String,
}

impl ErrorObject {
    pub fn new(code: ErrorCode, title: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_string(),
            title: title.into(),
        }
    }

    /// Error object carrying the code's default title.
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.default_title())
    }
}

/// Top-level error document. `errors` is always an array, even for one error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    pub fn single(error: ErrorObject) -> Self {
        Self { errors: vec![error] }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Every variant renders as an [`ErrorDocument`]. Server-side failures are
/// logged with their cause and reported to clients with a generic title.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Unprocessable Entity: {} violation(s)", .0.len())]
    UnprocessableEntity(Vec<ErrorObject>),

    #[error("Not Found: {}", .0.title)]
    NotFound(ErrorObject),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = match self {
            AppError::UnprocessableEntity(errors) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationFailed.code(),
                    violations = errors.len(),
                    "Validation failed"
                );
                errors
            }
            AppError::NotFound(error) => {
                tracing::info!(
                    error_code = ErrorCode::ResourceNotFound.code(),
                    "Not found: {}",
                    error.title
                );
                vec![error]
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                vec![ErrorObject::from_code(ErrorCode::InternalError)]
            }
        };

        (status, Json(ErrorDocument { errors })).into_response()
    }
}
