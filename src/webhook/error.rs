//! Error types for HTTP and dispatch operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level without dictating
/// how the caller should react.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the transport's timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for webhook dispatch.
///
/// Only conditions the dispatcher cannot express as a
/// [`WebhookOutcome::Failure`](super::WebhookOutcome::Failure) end up here:
/// the connection layer failing outright, an unusable URL, or a payload that
/// cannot be serialized.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The HTTP transport failed before a response was received.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The outbound payload could not be serialized to JSON.
    #[error("Failed to serialize webhook payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
