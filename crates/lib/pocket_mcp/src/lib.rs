//! # pocket_mcp
//!
//! MCP (Model Context Protocol) surface for the Pocket Joe template.
//!
//! Exposes the greeting operation as an MCP tool over Streamable HTTP. The
//! router is built as a library so `pocket_api` can mount it next to the REST
//! routes.

pub mod server;
pub mod tools;

use std::sync::Arc;

use pocket_core::Greeter;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

/// Path the MCP endpoint is served under.
pub const MCP_PATH: &str = "/mcp";

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build an Axum router that serves the MCP Streamable HTTP endpoint at `/mcp`.
///
/// # Arguments
///
/// * `greet` — greeting operation invoked by the `hello_world` tool.
/// * `ct` — cancellation token for graceful shutdown of open streams.
pub fn mcp_router(greet: Greeter, ct: CancellationToken) -> axum::Router {
    let service: StreamableHttpService<server::PocketMcpServer, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(server::PocketMcpServer::new(greet)),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                stateful_mode: false,
                cancellation_token: ct,
                ..Default::default()
            },
        );

    axum::Router::new().nest_service(MCP_PATH, service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
