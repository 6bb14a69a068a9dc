//! `hello_world` tool — parameters and result envelope.

use pocket_core::Greeter;
use rmcp::model::{CallToolResult, Content, ErrorCode, ErrorData};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

/// Parameters for the `hello_world` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct HelloRequest {
    /// Text to greet. Defaults to "world" if omitted or empty.
    pub text: Option<String>,
}

/// Run `greet` and wrap its payload in a `CallToolResult`.
///
/// The text content is the compact JSON encoding of the greeting, byte-for-byte
/// the same body `GET /api/hello` returns.
pub fn greeting_result(greet: Greeter, request: HelloRequest) -> Result<CallToolResult, ErrorData> {
    let payload = greet(request.text.as_deref());
    debug!(greeting = %payload.greeting, "hello_world tool invoked");
    let json = serde_json::to_string(&payload)
        .map_err(|e| ErrorData::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
