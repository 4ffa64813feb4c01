//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by our Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup with docs, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS gate, JSON body parsing)
//! - **[`validation`]**: Declarative per-route input rules
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (integer id path, validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::{cors::CorsConfig, server::ServerConfig, FromEnv};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(
//!         api_routes,
//!         Router::new(), // Root-level routes such as /health
//!         Arc::new(CorsConfig::from_env()?),
//!     )?;
//!
//!     create_production_app(router, &ServerConfig::from_env()?, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

// Re-export server types
pub use server::{
    close_postgres, create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};

// Re-export HTTP middleware
pub use http::{cors_gate, create_cors_layer, parse_json_body, JsonBody};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};

// Re-export validation types
pub use validation::{with_rules, Check, FieldError, InputErrors, Location, Rule, RuleSet};
