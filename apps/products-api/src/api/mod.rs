//! API routes module

pub mod health;
pub mod products;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Root endpoint answering `GET /api`
async fn root() -> Json<Value> {
    Json(json!({ "msg": "From API" }))
}

/// Create all routes mounted under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/products", products::router(state))
}
