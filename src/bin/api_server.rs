// API Server Binary Entry Point
//
// Purpose: Serve the shelf life classifier and estimator over HTTP
// Usage: cargo run --features api --bin api_server

use shelf_life_predictor::{create_router, ApiConfig, AppState, DEFAULT_MAX_BATCH_SIZE};
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "shelf_life_predictor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let bind_addr: IpAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(|| IpAddr::from([0, 0, 0, 0]));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let max_batch_size: usize = std::env::var("MAX_BATCH_SIZE")
        .ok()
        .and_then(|n| n.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_BATCH_SIZE);

    tracing::info!("Configuration:");
    tracing::info!("  BIND_ADDR: {}", bind_addr);
    tracing::info!("  PORT: {}", port);
    tracing::info!("  MAX_BATCH_SIZE: {}", max_batch_size);

    let state = AppState::new(ApiConfig { max_batch_size });

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let addr = SocketAddr::new(bind_addr, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
