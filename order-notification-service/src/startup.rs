//! Application startup and lifecycle management.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::NotificationDb;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: NotificationDb,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application: initialize the pool and bind the listener.
    ///
    /// On a successful bind this logs the startup banner followed by a dump
    /// of the active configuration, in that order. A bind failure propagates
    /// to the caller; there is no retry or fallback port.
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let db = NotificationDb::connect(&config.database)?;

        if config.database.run_migrations {
            db.run_migrations().await?;
        }

        // Port 0 binds a random free port, used by the test harness.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("HTTP server running on port {}", port);
        tracing::info!(
            "Active configuration: {}",
            serde_json::to_string_pretty(&config)
                .unwrap_or_else(|_| "<unserializable>".to_string())
        );

        let state = AppState { config, db };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &NotificationDb {
        &self.state.db
    }

    /// Run the server until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/health", get(handlers::health::health_check))
            .route("/ready", get(handlers::health::readiness_check))
            .route(
                "/notifications/:id",
                get(handlers::notifications::get_notification),
            )
            .route(
                "/orders/:order_id/notifications",
                get(handlers::notifications::list_order_notifications),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        axum::serve(self.listener, router).await
    }
}
