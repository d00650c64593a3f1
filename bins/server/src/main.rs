//! Sandbank mock-asset server.
//!
//! Serves the generated JSON fixtures read-only under `/mock/*`, standing in
//! for the static endpoints a hosted client would fetch.

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sandbank_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sandbank=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load configuration, using defaults");
        AppConfig::default()
    });

    let app = axum::Router::new()
        .nest_service("/mock", ServeDir::new(config.server.asset_root.join("mock")))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(
        asset_root = %config.server.asset_root.display(),
        "Asset server listening on {}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
