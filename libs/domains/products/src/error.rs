use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode, ErrorObject};
use thiserror::Error;

use crate::models::ProductId;
use crate::validation::Violation;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Invalid product attributes: {0:?}")]
    Validation(Vec<Violation>),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => {
                AppError::NotFound(ErrorObject::from_code(ErrorCode::ResourceNotFound))
            }
            ProductError::Validation(violations) => AppError::UnprocessableEntity(
                violations
                    .into_iter()
                    .map(|v| ErrorObject::new(ErrorCode::ValidationFailed, v.title))
                    .collect(),
            ),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Internal(format!("Database error: {}", err))
    }
}
