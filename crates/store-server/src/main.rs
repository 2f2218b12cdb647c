//! Store server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p store-server
//! ```
//!
//! Configuration is loaded from environment variables (see `store_common::AppConfig`).
//! The family pools are built eagerly at startup so a misconfigured database
//! fails the process immediately rather than on the first request.

use anyhow::Context;
use store_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use store_db::shared_registry;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %format!("{e:#}"), "Store server failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        capacity = config.database.pool.max_parallel_connections,
        "Starting store server"
    );

    let registry = shared_registry(&config.database)
        .await
        .context("building family pools")?;

    for status in registry.status() {
        info!(
            family = %status.family,
            capacity = status.capacity,
            available = status.available,
            "Family pool ready"
        );
    }

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    info!("Shutdown signal received");

    let degraded = registry.degraded();
    if !degraded.is_empty() {
        warn!(?degraded, "Shutting down with degraded families");
    }
    registry.close().await;

    Ok(())
}
