//! Greeting endpoint — REST mirror of the `hello_world` MCP tool.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{Greeting, HelloQuery};

/// `GET /api/hello` — greet the optional `text` query parameter.
pub async fn hello_world(
    State(state): State<AppState>,
    query: Result<Query<HelloQuery>, QueryRejection>,
) -> AppResult<Json<Greeting>> {
    let Query(HelloQuery { text }) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    Ok(Json((state.greet)(text.as_deref())))
}
