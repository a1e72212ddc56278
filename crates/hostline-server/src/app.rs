//! Router

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{chat_handler, health_check, session_handler};
use crate::state::AppState;

/// Build the full application router
///
/// Unknown paths fall back to the static site, and unknown files to
/// `index.html` so client-side routes survive a reload.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = ServeDir::new(static_dir)
        .fallback(ServeFile::new(format!("{static_dir}/index.html")));

    Router::new()
        // Health
        .route("/health", get(health_check))

        // Demo & dashboard API
        .route("/api/chat", post(chat_handler))
        .route("/api/session", get(session_handler))

        // Static site and content bundles
        .fallback_service(site)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
