//! Request handlers for the receive endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use serde_json::error::Category;

/// Acknowledgement body.
#[derive(Debug, Serialize)]
pub(super) struct Ack {
    pub message: &'static str,
}

/// Error body.
#[derive(Debug, Serialize)]
pub(super) struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub(super) const RECEIVED: &str = "Webhook data received successfully.";
pub(super) const ACTIVE: &str = "Webhook endpoint is active. Use POST to send data.";
pub(super) const INVALID_JSON: &str = "Invalid JSON received.";
pub(super) const PROCESSING_FAILED: &str = "Failed to process webhook data.";

/// Logs a pushed JSON document and acknowledges it.
pub(super) async fn receive(body: Bytes) -> Response {
    tracing::info!(bytes = body.len(), "Webhook received POST request");

    let data: Value = match serde_json::from_slice(&body) {
        Ok(data) => data,
        Err(e) => return rejection(&e),
    };

    tracing::info!(%data, "Received data from webhook");
    if let Some(sentence) = data.get("styled_sentence").and_then(Value::as_str) {
        tracing::info!(styled_sentence = sentence, "Styled sentence received");
    }

    (StatusCode::OK, Json(Ack { message: RECEIVED })).into_response()
}

/// Answers probes on the receive path.
pub(super) async fn status() -> Json<Ack> {
    tracing::debug!("Webhook received GET request");
    Json(Ack { message: ACTIVE })
}

/// Maps a body that failed to parse to the matching error response.
pub(super) fn rejection(error: &serde_json::Error) -> Response {
    match error.classify() {
        Category::Syntax | Category::Eof => {
            tracing::warn!(%error, "Rejected webhook body");
            let body = ErrorBody {
                error: INVALID_JSON,
                details: None,
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        // Unreachable when parsing into `Value`; kept as the generic 500 path.
        Category::Data | Category::Io => {
            tracing::error!(%error, "Error processing webhook data");
            let body = ErrorBody {
                error: PROCESSING_FAILED,
                details: Some(error.to_string()),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
