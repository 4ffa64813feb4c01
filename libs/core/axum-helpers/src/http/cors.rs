use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use tower_http::cors::CorsLayer;

use crate::errors::AppError;

/// Message returned to callers whose origin is not the configured one.
pub const CORS_REJECTION: &str = "Not allowed by CORS";

/// Creates the CORS layer answering preflights and decorating responses for
/// the configured origin.
///
/// The layer itself never rejects; [`cors_gate`] does that.
pub fn create_cors_layer(
    config: &CorsConfig,
) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&config.allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

/// Middleware rejecting requests from any origin but the configured one.
///
/// Requests without an `Origin` header pass through; same-origin browser
/// requests and non-browser clients do not send one.
pub async fn cors_gate(
    State(config): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        let allowed = origin
            .to_str()
            .map(|origin| config.allows(origin))
            .unwrap_or(false);

        if !allowed {
            tracing::warn!(origin = ?origin, "Rejected cross-origin request");
            return AppError::Forbidden(CORS_REJECTION.to_string()).into_response();
        }
    }

    next.run(request).await
}
