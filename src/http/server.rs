//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router that sends every method and path to the relay
//! - Wire up request tracing (one span per request, with a request ID)
//! - Serve on a listener until the shutdown signal fires

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::relay::{BuildError, Relay};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
}

impl RelayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: &RelayConfig) -> Result<Self, BuildError> {
        let relay = Arc::new(Relay::from_config(config)?);
        let router = Self::build_router(relay);
        Ok(Self { router })
    }

    /// Build the Axum router with its middleware layers.
    pub fn build_router(relay: Arc<Relay>) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(AppState { relay })
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    state.relay.handle(request).await
}
