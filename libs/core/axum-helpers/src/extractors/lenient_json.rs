//! JSON body extractor that never rejects on syntax.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Raw JSON document extractor.
///
/// Unlike `axum::Json`, the body is not required to carry a JSON content
/// type or to parse at all. An empty or unparsable body yields
/// `Value::Null`, leaving it to the validator to report which attributes
/// are missing. Only a failure to read the body itself is rejected.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::LenientJson;
///
/// async fn create(LenientJson(document): LenientJson) -> String {
///     document.pointer("/data/attributes/name").map(ToString::to_string).unwrap_or_default()
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson(pub Value);

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LenientJson(Value::Null));
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(LenientJson(value)),
            Err(e) => {
                tracing::debug!("Request body is not valid JSON: {}", e);
                Ok(LenientJson(Value::Null))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    async fn extract(body: &'static str) -> Value {
        let request = Request::builder().body(Body::from(body)).unwrap();
        let LenientJson(value) = LenientJson::from_request(request, &()).await.unwrap();
        value
    }

    #[tokio::test]
    async fn test_parses_json_without_content_type() {
        assert_eq!(extract(r#"{"a":1}"#).await, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        assert_eq!(extract("").await, Value::Null);
        assert_eq!(extract("  \n").await, Value::Null);
    }

    #[tokio::test]
    async fn test_malformed_body_is_null() {
        assert_eq!(extract("{not json").await, Value::Null);
    }
}
