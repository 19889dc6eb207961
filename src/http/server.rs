//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Hold the shared store state
//! - Serve with graceful shutdown

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::observability::metrics;
use crate::store::Stores;

/// Application state injected into handlers.
///
/// Both stores sit behind one coarse `RwLock`: reads see a consistent
/// snapshot under the shared lock, and every write path takes the exclusive
/// lock across both stores so the flip/count invariant holds under
/// concurrent creates.
#[derive(Clone)]
pub struct AppState {
    stores: Arc<RwLock<Stores>>,
}

impl AppState {
    /// Wrap seeded stores for sharing across handler tasks.
    pub fn new(stores: Stores) -> Self {
        Self {
            stores: Arc::new(RwLock::new(stores)),
        }
    }

    /// Shared read access to both stores.
    pub fn stores(&self) -> RwLockReadGuard<'_, Stores> {
        self.stores.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access spanning both stores. Every mutation goes through
    /// here; no await point may occur while the guard is held.
    pub fn stores_mut(&self) -> RwLockWriteGuard<'_, Stores> {
        self.stores.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// HTTP server for the flip service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new server over seeded stores with the given configuration.
    pub fn new(config: ServerConfig, stores: Stores) -> Self {
        let state = AppState::new(stores);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all handlers and middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/counts", get(handlers::list_counts))
            .route("/counts/{count_id}", get(handlers::get_count))
            .route(
                "/flips",
                get(handlers::list_flips).post(handlers::create_flip),
            )
            .route("/flips/{flip_id}", get(handlers::get_flip))
            .fallback(handlers::route_fallback)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(middleware::from_fn(metrics::track_requests))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server until Ctrl-C or the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: watch::Receiver<bool>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Resolves when either Ctrl-C arrives or the shutdown coordinator fires.
async fn shutdown_signal(mut shutdown: watch::Receiver<bool>) {
    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            if res.is_ok() {
                tracing::info!("Shutdown signal received");
            }
        }
        _ = shutdown.changed() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
