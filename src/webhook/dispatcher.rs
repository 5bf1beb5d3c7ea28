//! Webhook client trait and HTTP implementation.

use std::time::Duration;

use http::HeaderValue;
use http::header::{ACCEPT, CONTENT_TYPE};

use super::{DispatchError, HttpClient, HttpError, HttpRequest, OutboundPayload, WebhookOutcome};

/// Trait for delivering a payload to a webhook and classifying the reply.
///
/// Ordinary HTTP-level problems (non-2xx statuses, unparsable bodies,
/// missed deadlines) are reported as [`WebhookOutcome::Failure`]. Only
/// conditions that leave no response to classify surface as
/// [`DispatchError`].
pub trait WebhookClient: Send + Sync {
    /// Posts `payload` to `url` and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the payload cannot be serialized, the
    /// URL is unusable, or the connection fails outright.
    fn dispatch(
        &self,
        payload: &OutboundPayload,
        url: &url::Url,
    ) -> impl std::future::Future<Output = Result<WebhookOutcome, DispatchError>> + Send;
}

/// HTTP-based webhook client with an explicit response deadline.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```
/// use restyle::webhook::{HttpWebhook, ReqwestClient};
/// use std::time::Duration;
///
/// let webhook = HttpWebhook::new(ReqwestClient::new()).with_timeout(Duration::from_secs(10));
/// assert_eq!(webhook.timeout(), Duration::from_secs(10));
/// ```
#[derive(Debug)]
pub struct HttpWebhook<H> {
    client: H,
    timeout: Duration,
}

impl<H> HttpWebhook<H> {
    /// Default response deadline (30 seconds).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a webhook client using [`Self::DEFAULT_TIMEOUT`].
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self {
            client,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the response deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured response deadline.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<H: HttpClient> HttpWebhook<H> {
    /// Builds the JSON POST request for the payload.
    fn build_request(payload: &OutboundPayload, url: &url::Url) -> Result<HttpRequest, DispatchError> {
        let body = payload.to_json()?;

        Ok(HttpRequest::post(url.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(ACCEPT, HeaderValue::from_static("application/json"))
            .with_body(body))
    }
}

impl<H: HttpClient> WebhookClient for HttpWebhook<H> {
    async fn dispatch(
        &self,
        payload: &OutboundPayload,
        url: &url::Url,
    ) -> Result<WebhookOutcome, DispatchError> {
        let request = Self::build_request(payload, url)?;
        tracing::debug!(%url, timestamp = %payload.timestamp, "Sending webhook request");

        let response = match tokio::time::timeout(self.timeout, self.client.request(request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(HttpError::Timeout)) | Err(_) => {
                tracing::warn!(%url, timeout = ?self.timeout, "Webhook request timed out");
                return Ok(WebhookOutcome::timed_out(self.timeout));
            }
            Ok(Err(e)) => return Err(e.into()),
        };

        let outcome = WebhookOutcome::from_response(&response);
        match &outcome {
            WebhookOutcome::Failure { message, .. } => {
                tracing::warn!(status = %response.status, "{message}");
            }
            _ => tracing::debug!(
                status = %response.status,
                outcome = outcome.kind(),
                "Webhook responded"
            ),
        }

        Ok(outcome)
    }
}
