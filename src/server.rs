//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::Settings;
use crate::db::{establish_async_connection_pool, migrate};
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until a shutdown signal arrives.
    ///
    /// # Errors
    /// - Migration failures when `database.auto_migrate` is set
    /// - Database connection pool initialization errors
    /// - Address binding and server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        let Settings {
            application,
            server,
            database,
            logger,
        } = &self.settings;

        tracing::info!(
            app_name = %application.name,
            app_version = %application.version,
            "Application starting"
        );
        tracing::info!(
            host = %server.host,
            port = server.port,
            request_timeout = server.request_timeout,
            cors_origins = ?server.cors_origins,
            "Server configuration loaded"
        );
        // URL left out; it may carry credentials
        tracing::info!(
            max_connections = database.max_connections,
            min_connections = database.min_connections,
            connection_timeout = database.connection_timeout,
            auto_migrate = database.auto_migrate,
            "Database configuration loaded"
        );
        tracing::debug!(
            level = %logger.level,
            console_enabled = logger.console.enabled,
            file_enabled = logger.file.enabled,
            "Logger configuration loaded"
        );

        if database.auto_migrate {
            let applied = migrate::run_pending_migrations(&database.url).await?;
            tracing::info!(applied = applied.len(), migrations = ?applied, "Database migrations applied");
        }

        tracing::info!("Initializing database connection pool...");
        let pool = establish_async_connection_pool(database).await?;
        tracing::info!("Database connection pool initialized");

        let router = create_router(AppState::new(pool), server);

        let address = server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// A handler that fails to install is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
