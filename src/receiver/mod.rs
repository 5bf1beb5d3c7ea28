//! Passive receive endpoint for documents pushed by the workflow.
//!
//! `POST /api/webhook/receive` logs any JSON document and acknowledges it;
//! nothing is stored or correlated with outbound submissions.
//!
//! | Request                 | Response                                  |
//! |-------------------------|-------------------------------------------|
//! | POST, valid JSON        | `200 {"message": ..}`                     |
//! | POST, malformed JSON    | `400 {"error": "Invalid JSON received."}` |
//! | POST, other failure     | `500 {"error": .., "details": ..}`        |
//! | GET                     | `200 {"message": ..}`                     |

mod handler;

#[cfg(test)]
mod handler_tests;

use std::future::Future;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Path the endpoint is mounted on.
pub const RECEIVE_PATH: &str = "/api/webhook/receive";

/// Builds the receiver router.
///
/// Request bodies are not size-limited; any valid JSON document is
/// acknowledged.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route(RECEIVE_PATH, post(handler::receive).get(handler::status))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

/// Serves the receiver on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Receiver listening on http://{addr}{RECEIVE_PATH}");
    }

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await
}
