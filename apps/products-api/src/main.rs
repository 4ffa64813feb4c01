//! Products API - REST server

use axum_helpers::server::{close_postgres, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use products_api::{build_app, db, Config};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL at {}", config.database.redacted_url());

    // The pool is lazy; connectivity and migrations are checked in the background
    let db = db::connect_db(&config.database).await;
    db::spawn_schema_sync(db.clone());

    let app = build_app(&config, db.clone())?;

    info!("Starting Products API on {}", config.server.address());

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing PostgreSQL connections");
            close_postgres(db, db::APP_NAME).await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
