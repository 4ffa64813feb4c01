use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_gate, create_cors_layer, parse_json_body};
use axum::{middleware, Router};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Creates the application router with documentation and the shared
/// middleware stack.
///
/// This function sets up:
/// - OpenAPI documentation: JSON at `/api-docs/openapi.json`, Swagger UI at
///   `/docs`, ReDoc at `/redoc`, RapiDoc at `/rapidoc`, Scalar at `/scalar`
/// - API routes nested under `/api`
/// - `root_routes` (health and readiness) mounted at the root
/// - JSON 404 fallback
///
/// Middleware, outermost first, covering every route above:
/// 1. CORS gate rejecting foreign origins with `403`
/// 2. CORS response headers for the allowed origin
/// 3. Request tracing at `INFO`
/// 4. JSON body parsing, rejecting malformed bodies with `400`
///
/// # Errors
/// Returns an error if the configured origin is not a valid header value.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/products", products::handlers::router(service));
/// let router = create_router::<ApiDoc>(
///     api_routes,
///     health_router(app_info!()),
///     Arc::new(CorsConfig::from_env()?),
/// )?;
/// ```
pub fn create_router<T>(
    apis: Router,
    root_routes: Router,
    cors: Arc<CorsConfig>,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(&cors).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid allowed origin '{}': {}", cors.allowed_origin, e),
        )
    })?;

    info!("CORS configured with allowed origin: {}", cors.allowed_origin);

    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .merge(root_routes)
        .fallback(not_found)
        .layer(middleware::from_fn(parse_json_body))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer)
        .layer(middleware::from_fn_with_state(cors, cors_gate));

    Ok(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` within
/// `shutdown_timeout`.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
///
/// # Example
/// ```ignore
/// let cleanup = async move { close_postgres(db, "products").await };
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let signal = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // The server can also stop on error; release the cleanup task either way.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
