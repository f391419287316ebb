//! Application startup and lifecycle management.

use crate::config::DocumentConfig;
use crate::handlers;
use crate::services::{Database, DocumentService};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

/// Shared application state. The service is constructed here and handed to
/// the router; handlers hold it behind an interface-shaped seam rather than
/// reaching for globals.
#[derive(Clone)]
pub struct AppState {
    pub config: DocumentConfig,
    pub db: Arc<Database>,
    pub documents: DocumentService,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration. Connects the
    /// pool, applies migrations, and binds the listener (port 0 requests an
    /// ephemeral port, which tests rely on).
    pub async fn build(config: DocumentConfig) -> Result<Self, AppError> {
        let db = Database::new(
            &config.database.url,
            config.database.max_connections,
            config.database.min_connections,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to PostgreSQL");
            e
        })?;

        db.run_migrations().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to run migrations");
            e
        })?;

        let db = Arc::new(db);
        let documents = DocumentService::new(db.clone());

        let state = AppState {
            config: config.clone(),
            db,
            documents,
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "HTTP listener bound");

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
    pub fn db(&self) -> &Database {
        &self.state.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/health", get(handlers::health_check))
            .route(
                "/documents",
                get(handlers::list_documents).post(handlers::create_document),
            )
            .route(
                "/documents/:id",
                get(handlers::get_document)
                    .put(handlers::update_document)
                    .delete(handlers::delete_document),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        tracing::info!(
            service = "document-api",
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        axum::serve(self.listener, router).await
    }
}
