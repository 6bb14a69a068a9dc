//! Request tracing middleware.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, debug, info_span};

/// Wrap each request in a span carrying its method and path, and log the
/// status once the response is ready.
pub async fn trace_request(request: Request, next: Next) -> Response {
    let span = info_span!(
        parent: None,
        "http",
        method = %request.method(),
        path = %request.uri().path()
    );

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        debug!(
            status = response.status().as_u16(),
            elapsed = ?started.elapsed(),
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}
