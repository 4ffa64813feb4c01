//! Application router assembly

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{api, config::Config, openapi::ApiDoc, state::AppState};

/// Build the complete application router.
///
/// Does not bind a socket; `main` serves the result and tests drive it with
/// `tower::ServiceExt::oneshot`.
///
/// # Errors
/// Fails when the configured CORS origin is not a valid header value.
pub fn build_app(config: &Config, db: DatabaseConnection) -> eyre::Result<Router> {
    let state = AppState {
        config: config.clone(),
        db,
    };

    let api_routes = api::routes(&state);
    let root_routes = health_router(state.config.app).merge(api::health::router(state));
    let router =
        create_router::<ApiDoc>(api_routes, root_routes, Arc::new(config.cors.clone()))?;

    Ok(router)
}
