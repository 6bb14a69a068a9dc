//! Root descriptor listing the available endpoints.

use axum::Json;

use crate::models::{Endpoints, RootResponse};
use crate::routes;

/// Human-readable name reported by `GET /`.
pub const APP_NAME: &str = "Pocket Joe App Template";

/// `GET /` — static descriptor for discoverability.
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: APP_NAME.to_string(),
        endpoints: Endpoints {
            api: format!("{}?text=joe", routes::GET_API_HELLO),
            mcp: pocket_mcp::MCP_PATH.to_string(),
            health: routes::GET_HEALTH.to_string(),
        },
    })
}
