//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing span, request logger, timeout, body limit)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use axum::{body::Body, http::Request, middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::ServiceConfig;
use crate::http::health::get_health;
use crate::http::middleware::log_requests;
use crate::http::request::{RequestIdExt, UuidRequestId};
use crate::users::{users_router, UserStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

/// HTTP server for the user service.
pub struct HttpServer {
    router: Router,
    store: Arc<UserStore>,
}

impl HttpServer {
    /// Create a new HTTP server with an empty store.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, Arc::new(UserStore::new()))
    }

    /// Create a new HTTP server backed by an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<UserStore>) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, store }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/health", get(get_health))
            .merge(users_router())
            .with_state(state);
        apply_layers(routes, config)
    }

    /// Run the server until a shutdown broadcast arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!(users = self.store.len(), "HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The store served by this server.
    pub fn store(&self) -> Arc<UserStore> {
        self.store.clone()
    }
}

/// Wrap routes in the service's middleware stack.
///
/// Outermost first: request ID assignment and propagation, tracing span,
/// request logger, timeout, body limit.
#[allow(deprecated)]
fn apply_layers(routes: Router, config: &ServiceConfig) -> Router {
    routes
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(middleware::from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(())
                .on_response(())
                .on_failure(()),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = request.request_id().unwrap_or("unknown"),
    )
}
