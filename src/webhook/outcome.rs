//! Classification of webhook responses into a closed set of outcomes.

use std::time::Duration;

use serde_json::Value;

use super::HttpResponse;

/// Normalized result of a single webhook call.
///
/// Every response the endpoint can produce maps to exactly one variant,
/// so consumers match exhaustively instead of sniffing response shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// 2xx response whose body was declared and parsed as JSON.
    ///
    /// Normally a JSON object; other JSON values are kept as parsed and
    /// the consumer decides whether they hold anything useful.
    Structured(Value),

    /// 2xx response with a body that is not declared as JSON, verbatim.
    RawText(String),

    /// The call did not produce a usable result.
    Failure {
        /// HTTP status, or `None` if no response arrived before the deadline.
        status: Option<http::StatusCode>,
        /// Human-readable description of the failure.
        message: String,
    },
}

impl WebhookOutcome {
    /// Classifies a buffered HTTP response.
    ///
    /// - non-2xx: [`Failure`](Self::Failure), message taken from a JSON
    ///   `message`/`error` field when present, else the status reason.
    /// - 2xx with an empty body: [`RawText`](Self::RawText), whatever the
    ///   declared content type.
    /// - 2xx declared JSON: [`Structured`](Self::Structured), or a
    ///   [`Failure`](Self::Failure) if the body does not parse.
    /// - any other 2xx: [`RawText`](Self::RawText) with the body untouched.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        if !response.is_success() {
            return Self::Failure {
                status: Some(response.status),
                message: error_message(response),
            };
        }

        let body = response.body_lossy();
        if !response.declares_json() || body.trim().is_empty() {
            return Self::RawText(body.into_owned());
        }

        match serde_json::from_slice(&response.body) {
            Ok(value) => Self::Structured(value),
            Err(e) => Self::Failure {
                status: Some(response.status),
                message: format!("Invalid response format: declared JSON body did not parse ({e})"),
            },
        }
    }

    /// Builds the failure reported when the webhook misses its deadline.
    #[must_use]
    pub fn timed_out(deadline: Duration) -> Self {
        Self::Failure {
            status: None,
            message: format!("Webhook did not respond within {deadline:?}"),
        }
    }

    /// Returns true for the [`Failure`](Self::Failure) variant.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Short variant name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::RawText(_) => "raw_text",
            Self::Failure { .. } => "failure",
        }
    }
}

/// Describes a non-2xx response.
fn error_message(response: &HttpResponse) -> String {
    let code = response.status.as_u16();
    let detail = serde_json::from_slice::<Value>(&response.body)
        .ok()
        .as_ref()
        .and_then(error_detail)
        .or_else(|| response.status.canonical_reason().map(str::to_string));

    detail.map_or_else(
        || format!("Webhook request failed with HTTP status {code}"),
        |detail| format!("Webhook request failed with status {code}: {detail}"),
    )
}

/// Extracts `message`, then `error`, skipping falsy values (null, false,
/// zero and empty strings).
fn error_detail(value: &Value) -> Option<String> {
    ["message", "error"]
        .into_iter()
        .find_map(|key| match value.get(key)? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
}
