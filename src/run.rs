//! Application execution logic.
//!
//! This module wires validated configuration to the submission flow and
//! the receive endpoint.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use restyle::config::{ReceiverConfig, ValidatedConfig};
use restyle::submit::{RequestSubmitter, StyledSentenceResult, SubmissionRequest};
use restyle::webhook::{HttpWebhook, ReqwestClient};

/// Type alias for the application's submitter.
type AppSubmitter = RequestSubmitter<HttpWebhook<ReqwestClient>>;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to bind the receiver socket.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that could not be bound
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The receiver stopped with an I/O error.
    #[error("Receiver failed: {0}")]
    Serve(#[source] std::io::Error),

    /// Failed to encode the submission result.
    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Submits one request using the configured webhook.
///
/// Never fails: every problem is reported inside the returned result.
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
pub async fn submit(config: &ValidatedConfig, request: &SubmissionRequest) -> StyledSentenceResult {
    let submitter = create_submitter(config);

    tracing::debug!(endpoint = %submitter.endpoint(), "Using webhook endpoint");

    submitter.submit(request).await
}

/// Renders a result for the terminal.
///
/// With `json`, the result is printed in its serialized form. Otherwise a
/// success prints the styled sentence alone and a failure prints its error.
///
/// # Errors
///
/// Returns [`RunError::Encode`] if JSON encoding fails.
pub fn render(result: &StyledSentenceResult, json: bool) -> Result<String, RunError> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    Ok(match (result.styled_sentence(), result.error()) {
        (_, Some(error)) => format!("Error: {error}"),
        (Some(sentence), None) => sentence.to_string(),
        (None, None) => String::new(),
    })
}

/// Runs the receive endpoint until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
///
/// Excluded from coverage - requires signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn serve(config: &ReceiverConfig) -> Result<(), RunError> {
    let listener = bind(config.listen).await?;

    restyle::receiver::serve(listener, shutdown_signal())
        .await
        .map_err(RunError::Serve)?;

    tracing::info!("Receiver stopped");
    Ok(())
}

fn create_submitter(config: &ValidatedConfig) -> AppSubmitter {
    let webhook = HttpWebhook::new(ReqwestClient::new()).with_timeout(config.timeout);

    RequestSubmitter::new(webhook, config.url.clone()).with_result_field(&config.result_field)
}

async fn bind(addr: SocketAddr) -> Result<TcpListener, RunError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| RunError::Bind { addr, source })
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, stopping...");
}
