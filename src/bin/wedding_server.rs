//! Runs the wedding planner HTTP backend.
//!
//! Usage:
//!
//! ```text
//! wedding_server [--bind ADDR] [--database-url URL] [--pool-size N]
//!                [--log-filter FILTER] [--log-format compact|json]
//! ```
//!
//! Without `--database-url` (or `DATABASE_URL`) all data lives in process
//! memory and is lost on shutdown.

use clap::Parser;
use tokio::net::TcpListener;
use wedding::{
    config::ServerConfig,
    http::{AppState, router},
    persistence::build_pool,
    telemetry,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    telemetry::init(&config.log_filter, config.log_format)?;

    let state = match config.database_url.as_deref() {
        Some(url) => {
            let pool = build_pool(url, config.pool_size)?;
            tracing::info!(pool_size = config.pool_size, "using PostgreSQL storage");
            AppState::postgres(&pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory storage");
            AppState::in_memory()
        }
    };

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
