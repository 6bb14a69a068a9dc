//! Request and response bodies for the REST surface.

use serde::{Deserialize, Serialize};

pub use pocket_core::Greeting;

/// Query string accepted by `GET /api/hello`.
#[derive(Debug, Default, Deserialize)]
pub struct HelloQuery {
    pub text: Option<String>,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

/// Discoverable endpoints listed by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoints {
    pub api: String,
    pub mcp: String,
    pub health: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
