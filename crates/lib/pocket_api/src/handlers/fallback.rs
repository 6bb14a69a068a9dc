use axum::http::Uri;

use crate::error::AppError;

/// Any unmatched route.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
