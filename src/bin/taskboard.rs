//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/tasks TASKBOARD_JWT_SECRET=... taskboard
//! ```
//!
//! Configuration is read from `.env` and the environment; see
//! [`taskboard::config`] for the full list of variables. The server stops
//! gracefully on Ctrl-C.

use std::sync::Arc;
use taskboard::{
    auth::{adapters::JwtIdentityVerifier, services::AuthorizationGate},
    config::{AppConfig, ConfigError},
    http::build_router,
    task::{
        adapters::postgres::{PostgresTaskRepository, connect},
        services::TaskApiService,
    },
    telemetry::init_tracing,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Errors that stop the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to connect to the task store: {0}")]
    Pool(#[source] diesel::r2d2::PoolError),
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server terminated: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "taskboard stopped");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;
    info!(
        pool_size = config.store.pool_size,
        protect_list = config.router.protect_list,
        "configuration loaded"
    );

    let pool = connect(
        &config.store.database_url,
        config.store.pool_size,
        config.store.timeout,
    )
    .map_err(ServerError::Pool)?;
    let tasks = TaskApiService::new(Arc::new(PostgresTaskRepository::new(pool)));
    let gate = AuthorizationGate::new(Arc::new(JwtIdentityVerifier::new(&config.auth.jwt)))
        .with_session_cookie(config.auth.session_cookie);
    let app = build_router(tasks, gate, &config.router);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(ServerError::Bind)?;
    info!(address = %config.listen_addr, "taskboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
