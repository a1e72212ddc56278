//! Hostline HTTP Server
//!
//! Axum-based server for the Hostline site: serves the WASM frontend and its
//! content bundles, and backs the chat demo and dashboard shell with a small
//! JSON API.

mod app;
mod auth;
mod config;
mod handlers;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostline_core::DemoReceptionist;

use crate::app::build_router;
use crate::auth::auth_from_env;
use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    // Auth wrapper
    let auth = auth_from_env(config.loader);
    if auth.is_enabled() {
        tracing::info!("✓ Auth provider configured");
    } else {
        tracing::warn!("⚠ Auth not configured - dashboard runs in demo mode");
        tracing::warn!("  Set AUTH_PUBLISHABLE_KEY, AUTH_SECRET_KEY and AUTH_API_URL in .env");
    }

    tracing::info!(
        retries = config.loader.retries,
        interval_ms = config.loader.interval_ms,
        "Outbound retry policy"
    );

    let state = AppState {
        receptionist: Arc::new(DemoReceptionist::new(config.business.clone())),
        auth,
    };

    let app = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Hostline running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/chat     - Chat demo reply");
    tracing::info!("  GET  /api/session  - Dashboard session");
    tracing::info!("  GET  /*            - Static site ({})", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
