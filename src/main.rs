use std::net::SocketAddr;
use std::sync::Arc;

use probe_demo::{AppState, Config, HealthState, MetricsRegistry, Result, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::load();
    tracing::debug!("Background color: {}", config.background_color);

    let metrics = MetricsRegistry::new();
    let health = HealthState::new();

    let state = Arc::new(AppState {
        config: config.clone(),
        health,
        metrics,
    });

    // Shutdown channel (graceful shutdown)
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    // Wait for Ctrl+C
    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let app = create_router(state.clone());

    let addr: SocketAddr = config.bind_addr.parse().map_err(|e| {
        tracing::error!("Invalid bind address '{}': {}", config.bind_addr, e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /        - HTML greeting");
    tracing::info!("  - GET  /api     - Service identity as JSON");
    tracing::info!("  - ANY  /err     - Simulated internal failure");
    tracing::info!("  - ANY  /metrics - Prometheus metrics");
    tracing::info!("  - GET  /health  - Health check");
    tracing::info!("  - POST /down    - Mark the service unhealthy");

    state.metrics.set_up();

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // EnvFilter::try_from_default_env() honors RUST_LOG when set,
    // otherwise default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
