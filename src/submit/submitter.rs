//! Submission flow: validate, stamp, dispatch, interpret.

use crate::time::{Clock, SystemClock};
use crate::webhook::{DispatchError, OutboundPayload, WebhookClient, WebhookOutcome};

use super::result::{GENERIC_FAILURE_MESSAGE, MISSING_FIELDS_MESSAGE};
use super::{StyledSentenceResult, SubmissionRequest};

/// Default name of the JSON field holding the styled sentence.
pub const DEFAULT_RESULT_FIELD: &str = "styled_sentence";

/// Submits sentences to a fixed webhook endpoint.
///
/// Every call is independent: the submitter holds only configuration, and
/// each submission builds its own payload and result.
///
/// # Type Parameters
///
/// - `W`: The webhook client used for dispatch
/// - `C`: The clock stamping outbound payloads (defaults to [`SystemClock`])
///
/// # Example
///
/// ```
/// use restyle::submit::RequestSubmitter;
/// use restyle::webhook::{HttpWebhook, ReqwestClient};
/// use url::Url;
///
/// let submitter = RequestSubmitter::new(
///     HttpWebhook::new(ReqwestClient::new()),
///     Url::parse("https://hooks.example.com/restyle").unwrap(),
/// )
/// .with_result_field("output");
/// assert_eq!(submitter.result_field(), "output");
/// ```
#[derive(Debug)]
pub struct RequestSubmitter<W, C = SystemClock> {
    webhook: W,
    clock: C,
    endpoint: url::Url,
    result_field: String,
}

impl<W> RequestSubmitter<W, SystemClock> {
    /// Creates a submitter posting to `endpoint` through `webhook`.
    #[must_use]
    pub fn new(webhook: W, endpoint: url::Url) -> Self {
        Self {
            webhook,
            clock: SystemClock,
            endpoint,
            result_field: DEFAULT_RESULT_FIELD.to_string(),
        }
    }
}

impl<W, C> RequestSubmitter<W, C> {
    /// Sets the clock used for payload timestamps.
    ///
    /// This is primarily useful for testing with fixed instants.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> RequestSubmitter<W, C2> {
        RequestSubmitter {
            webhook: self.webhook,
            clock,
            endpoint: self.endpoint,
            result_field: self.result_field,
        }
    }

    /// Sets the JSON field read from structured responses.
    #[must_use]
    pub fn with_result_field(mut self, field: impl Into<String>) -> Self {
        self.result_field = field.into();
        self
    }

    /// Returns the webhook client.
    #[must_use]
    pub const fn webhook(&self) -> &W {
        &self.webhook
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Returns the JSON field read from structured responses.
    #[must_use]
    pub fn result_field(&self) -> &str {
        &self.result_field
    }
}

impl<W: WebhookClient, C: Clock> RequestSubmitter<W, C> {
    /// Submits a request and reports the result.
    ///
    /// Never fails: validation problems, webhook failures and transport
    /// errors all come back as an unsuccessful [`StyledSentenceResult`].
    pub async fn submit(&self, request: &SubmissionRequest) -> StyledSentenceResult {
        if !request.is_complete() {
            tracing::debug!("Rejected submission with missing sentence or style");
            return StyledSentenceResult::failed(MISSING_FIELDS_MESSAGE);
        }

        let payload = OutboundPayload::new(request.sentence(), request.style(), self.clock.now());
        tracing::info!(style = request.style(), "Submitting sentence to webhook");

        match self.webhook.dispatch(&payload, &self.endpoint).await {
            Ok(outcome) => self.interpret(outcome),
            Err(e) => {
                tracing::error!(error = %e, "Error sending data to webhook");
                StyledSentenceResult::failed(describe(&e))
            }
        }
    }

    /// Maps a classified response to the caller-facing result.
    fn interpret(&self, outcome: WebhookOutcome) -> StyledSentenceResult {
        match outcome {
            WebhookOutcome::Failure { message, .. } => StyledSentenceResult::failed(message),
            WebhookOutcome::Structured(value) => {
                let sentence = value
                    .get(&self.result_field)
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string);
                if sentence.is_none() {
                    tracing::warn!(
                        field = %self.result_field,
                        "Webhook response did not contain the expected field"
                    );
                }
                StyledSentenceResult::styled(sentence)
            }
            WebhookOutcome::RawText(body) => {
                if body.trim().is_empty() {
                    tracing::warn!("Webhook returned an empty body");
                    StyledSentenceResult::styled(None)
                } else {
                    StyledSentenceResult::styled(Some(body))
                }
            }
        }
    }
}

fn describe(error: &DispatchError) -> String {
    let text = error.to_string();
    if text.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        text
    }
}
