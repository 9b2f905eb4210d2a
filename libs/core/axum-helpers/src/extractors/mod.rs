//! Custom extractors for Axum handlers.
//!
//! Both extractors turn malformed input into the same error documents the
//! handlers produce, so clients never see axum's plain-text rejections.

pub mod lenient_json;
pub mod uuid_path;

pub use lenient_json::LenientJson;
pub use uuid_path::UuidPath;
