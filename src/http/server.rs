//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the API handlers
//! - Wire up middleware (CORS, metrics, timeout, request ID, tracing)
//! - Serve on a bound listener until shutdown

use axum::{middleware, routing::any, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::handlers::{health, list_projects};
use crate::http::middleware::cors_middleware;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::signals::wait_for_signal;
use crate::observability::metrics;
use crate::projects::ProjectFilter;
use crate::upstream::{FetchError, UpstreamClient};

pub const PROJECTS_PATH: &str = "/api/projects";
pub const HEALTH_PATH: &str = "/api/health";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<UpstreamClient>,
    pub filter: Arc<ProjectFilter>,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Result<Self, FetchError> {
        let client = UpstreamClient::new(config.upstream.clone())?;
        let filter = ProjectFilter::from_config(&config.upstream.owner, &config.projects);
        Ok(Self {
            client: Arc::new(client),
            filter: Arc::new(filter),
        })
    }
}

/// HTTP server for the portfolio API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, FetchError> {
        let state = AppState::from_config(&config)?;
        let router = build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Run the server until `shutdown` fires or the process is signalled.
    pub async fn run(self, listener: TcpListener, mut shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            owner = %self.config.upstream.owner,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => {}
                    _ = wait_for_signal() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    Router::new()
        .route(PROJECTS_PATH, any(list_projects))
        .route(HEALTH_PATH, any(health))
        .route_layer(middleware::from_fn(cors_middleware))
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}
