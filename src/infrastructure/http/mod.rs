use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{clone::CloneController, demo, health};
use crate::infrastructure::config::Config;

pub mod request_id;

use request_id::request_id_middleware;

/// Reference audio uploads up to this many bytes are accepted
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Build the application router. Shared with the e2e tests so they exercise
/// the exact production middleware stack.
pub fn build_router(config: Arc<Config>, clone_controller: Arc<CloneController>) -> Router {
    // The clone endpoint answers both verbs on one path: the demo UI posts,
    // scripted clients occasionally probe with GET
    let clone_routes = Router::new()
        .route(
            "/clone_voice",
            get(CloneController::clone_voice).post(CloneController::clone_voice),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(clone_controller);

    Router::new()
        .route("/", get(demo::demo_page))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config.clone())
        .merge(clone_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    clone_controller: Arc<CloneController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), clone_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
