//! Type-safe error codes for API responses.
//!
//! Every error object sent to a client carries one of these codes. Each code
//! has:
//! - the wire identifier clients match on (e.g. `"Error-1"`)
//! - an integer for structured logs and monitoring (e.g. `1001`)
//! - a default human-readable title
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationFailed;
//! assert_eq!(code.as_str(), "Error-1");
//! assert_eq!(code.code(), 1001);
//! ```

use axum::http::StatusCode;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A request attribute broke one of its rules
    ValidationFailed,

    /// The identifier in the path names no record
    ResourceNotFound,

    /// An unexpected failure in the service or its store
    InternalError,

    /// No route matches the request path
    RouteNotFound,

    /// The route exists but not for this HTTP method
    MethodNotAllowed,
}

impl ErrorCode {
    /// Wire identifier placed in the `code` member of an error object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Error-1",
            Self::ResourceNotFound => "Error-2",
            Self::InternalError => "Error-3",
            Self::RouteNotFound => "Error-4",
            Self::MethodNotAllowed => "Error-5",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: client errors
    /// - 2000-2999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationFailed => 1001,
            Self::ResourceNotFound => 1002,
            Self::RouteNotFound => 1003,
            Self::MethodNotAllowed => 1004,
            Self::InternalError => 2001,
        }
    }

    /// HTTP status that accompanies this code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ResourceNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default title used when the caller has nothing more specific.
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "The request attributes are invalid",
            Self::ResourceNotFound => "ID does not exist",
            Self::InternalError => "An internal server error occurred",
            Self::RouteNotFound => "The requested route was not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this route",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
