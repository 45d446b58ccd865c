//! Router configuration for the HTTP surface.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::cors::create_cors_layer;
use super::handlers::{
    delete_file, download_file, get_theme, list_files, set_theme, upload_file, AppState,
};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    // Leave headroom above the upload cap so the multipart framing fits
    // and the service-level check produces the user-facing error.
    let body_limit = app_state.max_upload_size as usize + 1024 * 1024;

    Router::new()
        .route("/files", post(upload_file).get(list_files))
        .route("/files/:id", get(download_file).delete(delete_file))
        .route("/theme", get(get_theme).post(set_theme))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
