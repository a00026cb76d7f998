//! Record Registry HTTP Server
//!
//! Provides a REST API over the in-memory record repository.

pub mod api;
pub mod config;
pub mod error;

use crate::config::ServerConfig;
use anyhow::Result;
use registry_core::RetryPolicy;
use registry_store::{InMemoryRepository, RecordRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    // Initialize repository
    let repository = build_repository(&config);
    info!(
        seeded = config.seed_sample_data,
        "Record repository initialized"
    );

    // Create router
    let app = api::create_router(repository);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Entity API: http://{}/entity", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "registry_server=info,registry_store=info,registry_core=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

/// Build the record repository from configuration
fn build_repository(config: &ServerConfig) -> Arc<dyn RecordRepository> {
    let retry = RetryPolicy::from(&config.retry);
    let repository = if config.seed_sample_data {
        InMemoryRepository::with_records(registry_store::seed::sample_records(), retry)
    } else {
        InMemoryRepository::with_retry_policy(retry)
    };
    Arc::new(repository)
}
