//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - Single-origin CORS policy (rejecting gate plus response headers)
//! - JSON body parsing ahead of routing
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_gate, create_cors_layer, parse_json_body};
//!
//! let cors = Arc::new(CorsConfig::from_env()?);
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(parse_json_body))
//!     .layer(create_cors_layer(&cors)?)
//!     .layer(axum::middleware::from_fn_with_state(cors, cors_gate));
//! ```

pub mod cors;
pub mod json;

pub use cors::{cors_gate, create_cors_layer, CORS_REJECTION};
pub use json::{parse_json_body, JsonBody, JSON_BODY_LIMIT};
