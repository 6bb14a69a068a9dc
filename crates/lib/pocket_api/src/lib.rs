//! # pocket_api
//!
//! HTTP API library for the Pocket Joe template.
//!
//! Serves the greeting operation over REST (`GET /api/hello`) and mounts the
//! MCP tool endpoint from `pocket_mcp` at `/mcp` on the same router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod trace;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use pocket_core::Greeter;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::ApiConfig;
use crate::handlers::{fallback, health, hello, index};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Greeting operation behind `GET /api/hello`.
    pub greet: Greeter,
}

/// Builds the Axum router with all routes, the MCP endpoint and CORS.
///
/// `ct` is handed to the MCP service so open streams close on shutdown.
pub fn router(config: &ApiConfig, greet: Greeter, ct: CancellationToken) -> Router {
    let rest = Router::new()
        .route(routes::GET_ROOT, get(index::root_handler))
        .route(routes::GET_API_HELLO, get(hello::hello_world))
        .route(routes::GET_HEALTH, get(health::health_handler))
        .fallback(fallback::not_found_handler)
        .with_state(AppState { greet });

    rest.merge(pocket_mcp::mcp_router(greet, ct))
        .layer(axum::middleware::from_fn(trace::trace_request))
        .layer(config.allowed_origins.cors_layer())
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
