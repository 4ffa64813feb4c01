//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that turn rejections into the standard error body.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
