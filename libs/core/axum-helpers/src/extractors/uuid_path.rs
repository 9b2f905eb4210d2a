//! UUID path parameter extractor.

use crate::errors::{AppError, ErrorCode, ErrorObject};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for UUID path parameters.
///
/// A segment that is not a UUID cannot name a stored record, so it is
/// rejected the same way as an unknown id: `404` with `Error-2`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn show(UuidPath(id): UuidPath) -> String {
///     format!("Record: {}", id)
/// }
///
/// let app = Router::new().route("/records/{id}", get(show));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(id.trim()) {
            Ok(uuid) => Ok(UuidPath(uuid)),
            Err(_) => {
                tracing::debug!(id = %id, "Path id is not a UUID");
                Err(
                    AppError::NotFound(ErrorObject::from_code(ErrorCode::ResourceNotFound))
                        .into_response(),
                )
            }
        }
    }
}
