pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod negotiate;
pub mod pagination;
pub mod views;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::db::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
}

/// Run the server
pub async fn run(config: Config) -> Result<()> {
    // Bounded pool with an explicit acquire timeout so requests never
    // block forever on an exhausted pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.database.idle_timeout_secs))
        .connect(&config.database.url)
        .await
        .context("Cannot connect to database")?;

    tracing::info!(
        "Database pool: max={} connections, acquire timeout {}s",
        config.database.max_connections,
        config.database.acquire_timeout_secs
    );

    let db = Database::new(pool);

    // Startup health check. Failure here is fatal: the process must not
    // accept traffic it cannot serve.
    db.ping().await.context("Database ping failed")?;
    tracing::info!("Database ping ok");

    let config = Arc::new(config);
    let state = AppState {
        db,
        config: config.clone(),
    };

    // Build router: content routes first, then the static asset fallback
    let app = Router::new()
        .merge(api::router())
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        "Catalog listening on {} (comments per page: {})",
        addr,
        config.pagination.page_size
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
