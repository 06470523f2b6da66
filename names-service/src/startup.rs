//! Application startup and lifecycle management.

use service_core::error::AppError;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::NamesConfig;
use crate::services::{MongoNameStore, NameStore};
use crate::{build_router, AppState};

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    mongo: Option<MongoNameStore>,
}

impl Application {
    /// Connect to MongoDB, create indexes and bind the listener.
    ///
    /// Any failure here is fatal for the process; there is no retry.
    pub async fn build(config: NamesConfig) -> Result<Self, AppError> {
        let store = MongoNameStore::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                AppError::internal("Database connection error", e)
            })?;

        store.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            AppError::internal("Database initialization error", e)
        })?;

        let mut app = Self::build_with_store(config, Arc::new(store.clone())).await?;
        app.mongo = Some(store);
        Ok(app)
    }

    /// Bind the listener around an already constructed store.
    pub async fn build_with_store(
        config: NamesConfig,
        store: Arc<dyn NameStore>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port (tests)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port, "Listening");

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, store),
            mongo: None,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_shutdown(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests and
    /// close the database connections.
    pub async fn run_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        if let Some(mongo) = self.mongo {
            mongo.shutdown().await;
        }

        tracing::info!("Service shutdown complete");
        Ok(())
    }
}
