//! MCP server handler — defines the Pocket Joe MCP server and its tools.

use pocket_core::Greeter;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};

use crate::tools::hello::{self, HelloRequest};

/// Pocket Joe MCP server handler.
///
/// Holds the greeting function and a `ToolRouter` for tool dispatch. A new
/// instance is created per MCP session by the `StreamableHttpService` factory.
#[derive(Clone)]
pub struct PocketMcpServer {
    greet: Greeter,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PocketMcpServer {
    /// Create a new server instance bound to `greet`.
    pub fn new(greet: Greeter) -> Self {
        Self {
            greet,
            tool_router: Self::tool_router(),
        }
    }

    /// Return tool definitions registered in this server.
    pub fn list_tools() -> Vec<rmcp::model::Tool> {
        Self::tool_router().list_all()
    }

    /// Return a hello greeting.
    #[tool(description = "Return a hello greeting. Optional input.")]
    pub fn hello_world(
        &self,
        Parameters(request): Parameters<HelloRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        hello::greeting_result(self.greet, request)
    }
}

#[tool_handler]
impl ServerHandler for PocketMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Pocket Joe MCP server. Call hello_world with optional `text` to get a greeting."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
