use axum::{
    Json,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorDocument, ErrorObject};

fn error_response(code: ErrorCode) -> Response {
    let body = Json(ErrorDocument::single(ErrorObject::from_code(code)));
    (code.status(), body).into_response()
}

/// Fallback for paths no route matches.
pub async fn not_found() -> Response {
    error_response(ErrorCode::RouteNotFound)
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    error_response(ErrorCode::MethodNotAllowed)
}
