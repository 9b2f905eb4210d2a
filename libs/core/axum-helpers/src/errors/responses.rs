//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorDocument;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "errors": [{ "code": "Error-3", "title": "An internal server error occurred" }]
    })
)]
pub struct InternalServerErrorResponse(pub ErrorDocument);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - one error object per invalid attribute",
    content_type = "application/json",
    example = json!({
        "errors": [
            { "code": "Error-1", "title": "A name is required" },
            { "code": "Error-1", "title": "The price has to be numeric" }
        ]
    })
)]
pub struct UnprocessableEntityResponse(pub ErrorDocument);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "errors": [{ "code": "Error-2", "title": "ID does not exist" }]
    })
)]
pub struct NotFoundResponse(pub ErrorDocument);
