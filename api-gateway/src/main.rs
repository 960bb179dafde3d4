//! Premium Gateway binary
//!
//! Loads the model artifact once, then serves the JSON endpoint and the
//! interactive form until Ctrl-C.

use tracing::{error, info};

use premium_engine::PredictionService;
use premium_gateway::{router, AppState, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("premium_gateway=info".parse()?),
        )
        .json()
        .init();

    let config = GatewayConfig::load()?;
    info!(?config, "Configuration loaded");

    // No listener without a usable model
    let service = PredictionService::from_artifact(&config.model_path).map_err(|e| {
        error!(error = %e, path = %config.model_path.display(), "Failed to load model");
        e
    })?;

    let app = router(AppState::new(service), &config);

    let addr = config.socket_addr()?;
    info!("Premium Gateway starting on {}", addr);
    info!("Endpoints: /, /health, /predict, /form");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Premium Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
